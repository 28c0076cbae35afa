extern crate rx_sparse_fsa;

use std::io::{self, BufRead};

use rx_sparse_fsa::compile;

fn main() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        match compile(expression) {
            Ok(automaton) => {
                println!("=== Automaton for: {} ===", expression);
                println!("{}", automaton);
                println!();
            }
            Err(err) => println!("invalid expression: {}", err),
        }
    }
}
