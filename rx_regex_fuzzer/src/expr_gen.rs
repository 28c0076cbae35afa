/**
 * Random generation of well-formed expressions in the restricted dialect.
 */

/*
 * The generator walks the dialect's grammar top-down:
 *
 * alternative ::= sequence ( '|' alternative ) ?
 * sequence    ::= quantified +
 * quantified  ::= atom ( '*' | '+' | '?' ) ?
 * atom        ::= '(' alternative ')' | LITERAL
 *
 * so every produced string passes validation by construction. Depth only
 * shrinks on the recursive cases, which bounds the output size.
 */

use crate::rnd::{chance, rand_range, sample};

pub struct ExprGenerator {
    charset: Vec<char>,
    max_depth: usize,
}

impl ExprGenerator {
    pub fn with_charset(charset: &str, max_depth: usize) -> Self {
        assert!(!charset.is_empty());
        Self {
            charset: charset.chars().collect(),
            max_depth,
        }
    }

    pub fn generate(&self) -> String {
        let mut out = String::new();
        self.gen_alternative(&mut out, self.max_depth);
        out
    }

    fn gen_alternative(&self, out: &mut String, depth: usize) {
        self.gen_sequence(out, depth);
        if depth > 0 && chance(30) {
            out.push('|');
            self.gen_alternative(out, depth - 1);
        }
    }

    fn gen_sequence(&self, out: &mut String, depth: usize) {
        let count = rand_range(&(1..4));
        for _ in 0..count {
            self.gen_quantified(out, depth);
        }
    }

    fn gen_quantified(&self, out: &mut String, depth: usize) {
        self.gen_atom(out, depth);
        if chance(25) {
            out.push(*sample(&['*', '+', '?']));
        }
    }

    fn gen_atom(&self, out: &mut String, depth: usize) {
        if depth > 0 && chance(20) {
            out.push('(');
            self.gen_alternative(out, depth - 1);
            out.push(')');
        }
        else {
            out.push(*sample(&self.charset));
        }
    }
}
