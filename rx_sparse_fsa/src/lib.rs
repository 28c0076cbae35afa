extern crate rx_postfix;

pub mod nfa;

mod display;
mod dot;

pub use nfa::{Automaton, Classification, Reason, State, Symbol};
pub use rx_postfix::{Error, Token};

/// The whole pipeline: validate, translate to postfix, build the automaton.
pub fn compile(source: &str) -> Result<Automaton, Error> {
    let postfix = rx_postfix::to_postfix(source)?;
    Ok(Automaton::from_postfix(&postfix))
}

#[test]
fn smoke() {
    let nf = compile("(a|b)*abb").unwrap();
    println!("NFA:\n{}", nf);
    println!("dot:\n{}", nf.dot());
}
