extern crate rx_sparse_fsa;

use std::collections::BTreeSet;

use rx_sparse_fsa::{compile, Automaton, State, Symbol};

/// Test-only subset simulation over epsilon closures. The library itself
/// ships no matcher; this exists to pin the language each construction
/// recognizes.
fn accepts(automaton: &Automaton, input: &str) -> bool {
    let mut current: BTreeSet<State> = automaton.epsilon_closure(&automaton.start);
    for c in input.chars() {
        let mut next = BTreeSet::new();
        for state in &current {
            if let Some(destinations) = automaton.destinations(state, Symbol::Literal(c)) {
                for destination in destinations {
                    next.extend(automaton.epsilon_closure(destination));
                }
            }
        }
        current = next;
        if current.is_empty() {
            return false;
        }
    }
    current.iter().any(|s| automaton.is_accepting(s))
}

fn build(source: &str) -> Automaton {
    compile(source).unwrap()
}

#[test]
fn concatenation_direction() {
    let nf = build("ab");

    assert!(accepts(&nf, "ab"));
    assert!(!accepts(&nf, "ba"));
    assert!(!accepts(&nf, "a"));
    assert!(!accepts(&nf, "abb"));
}

#[test]
fn alternation_takes_one_branch() {
    let nf = build("a|b");

    assert!(accepts(&nf, "a"));
    assert!(accepts(&nf, "b"));
    assert!(!accepts(&nf, ""));
    assert!(!accepts(&nf, "ab"));
    assert!(!accepts(&nf, "ba"));
}

#[test]
fn star_accepts_zero_occurrences() {
    let nf = build("a*");

    assert!(accepts(&nf, ""));
    assert!(accepts(&nf, "a"));
    assert!(accepts(&nf, "aaaa"));
    assert!(!accepts(&nf, "b"));
}

#[test]
fn plus_requires_at_least_one() {
    let nf = build("a+");

    assert!(!accepts(&nf, ""));
    assert!(accepts(&nf, "a"));
    assert!(accepts(&nf, "aaa"));
}

#[test]
fn question_accepts_at_most_one() {
    let nf = build("a?");

    assert!(accepts(&nf, ""));
    assert!(accepts(&nf, "a"));
    assert!(!accepts(&nf, "aa"));
}

#[test]
fn grouping_scopes_the_operator() {
    let nf = build("(ab)*");

    assert!(accepts(&nf, ""));
    assert!(accepts(&nf, "ab"));
    assert!(accepts(&nf, "abab"));
    assert!(!accepts(&nf, "aba"));
}

#[test]
fn the_classic_combined_expression() {
    let nf = build("(a|b)*abb");

    assert!(accepts(&nf, "abb"));
    assert!(accepts(&nf, "aabb"));
    assert!(accepts(&nf, "babb"));
    assert!(accepts(&nf, "abababb"));
    assert!(!accepts(&nf, ""));
    assert!(!accepts(&nf, "ab"));
    assert!(!accepts(&nf, "abba"));
}

#[test]
fn nested_quantifiers_compose() {
    let nf = build("a?(b|c)d+");

    assert!(accepts(&nf, "bd"));
    assert!(accepts(&nf, "acd"));
    assert!(accepts(&nf, "abddd"));
    assert!(!accepts(&nf, "ad"));
    assert!(!accepts(&nf, "abcd"));
}

#[test]
fn rejection_happens_before_construction() {
    assert!(compile("(a|b").is_err());
    assert!(compile("a&b").is_err());
    assert!(compile("").is_err());
}
