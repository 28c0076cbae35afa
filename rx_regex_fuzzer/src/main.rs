extern crate rx_postfix;
extern crate rx_sparse_fsa;

mod expr_gen;
mod rnd;

use std::collections::BTreeSet;

use expr_gen::ExprGenerator;
use rx_sparse_fsa::{compile, Classification};

const ITERATIONS: usize = 1000;

fn main() {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().expect("seed must be a number"),
        None => rnd::seed_from_system_time(),
    };
    rnd::set_seed(seed);
    println!("seed: {}", rnd::current_seed());

    let generator = ExprGenerator::with_charset("abcdef01", 3);
    for i in 0..ITERATIONS {
        let expression = generator.generate();
        check_invariants(&expression);
        if (i + 1) % 100 == 0 {
            println!("{} expressions checked", i + 1);
        }
    }
    println!("ok");
}

/// The structural invariants every construction must satisfy, checked on a
/// random expression. Failures print the expression and the seed so the run
/// can be replayed with `rx_regex_fuzzer <seed>`.
fn check_invariants(expression: &str) {
    assert!(
        rx_postfix::validate(expression),
        "generator produced an invalid expression {:?} (seed {})",
        expression,
        rnd::current_seed()
    );

    let automaton = match compile(expression) {
        Ok(automaton) => automaton,
        Err(err) => panic!(
            "compilation rejected {:?}: {} (seed {})",
            expression,
            err,
            rnd::current_seed()
        ),
    };

    assert_eq!(
        automaton.accepting().len(),
        1,
        "not exactly one accepting state for {:?} (seed {})",
        expression,
        rnd::current_seed()
    );

    assert_eq!(
        automaton.reachable_states().len(),
        automaton.state_count(),
        "orphan states for {:?} (seed {})",
        expression,
        rnd::current_seed()
    );

    let literals: BTreeSet<char> = expression
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    assert_eq!(
        *automaton.alphabet(),
        literals,
        "alphabet mismatch for {:?} (seed {})",
        expression,
        rnd::current_seed()
    );

    let uses_operators = expression.chars().any(|c| "|*+?".contains(c));
    if uses_operators {
        match automaton.classify() {
            Classification::NonDeterministic(_) => {}
            Classification::Deterministic => panic!(
                "{:?} uses operators but classified deterministic (seed {})",
                expression,
                rnd::current_seed()
            ),
        }
    }
}
