/**
 * Human-readable rendering of an automaton: the state listing, the
 * bordered transition table and the determinism classification line.
 */

use std::fmt;

use crate::nfa::{Automaton, Classification, Reason, State, Symbol};

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states: Vec<String> = self.states().map(|s| s.to_string()).collect();
        writeln!(f, "States: {{{}}}", states.join(", "))?;

        let alphabet: Vec<String> = self.alphabet().iter().map(|c| c.to_string()).collect();
        writeln!(f, "Alphabet: {{{}}}", alphabet.join(", "))?;

        writeln!(f, "Start state: {}", self.start)?;

        let accepting: Vec<String> = self.accepting().iter().map(|s| s.to_string()).collect();
        writeln!(f, "Accepting states: {{{}}}", accepting.join(", "))?;
        writeln!(f)?;

        // One column per alphabet symbol; the epsilon column only exists
        // when some state actually has an epsilon transition.
        let mut columns: Vec<Symbol> = self
            .alphabet()
            .iter()
            .map(|c| Symbol::Literal(*c))
            .collect();
        if self.has_epsilon_transitions() {
            columns.push(Symbol::Epsilon);
        }

        let border = table_border(columns.len());
        writeln!(f, "Transition table:")?;
        writeln!(f, "{}", border)?;
        write!(f, "| {:<8} ", "State")?;
        for column in &columns {
            write!(f, "| {:<9} ", column.to_string())?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{}", border)?;
        for state in self.states() {
            write!(f, "| {:<8} ", state.to_string())?;
            for column in &columns {
                write!(f, "| {:<9} ", destination_cell(self, &state, *column))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", border)?;
        writeln!(f)?;

        write!(f, "Classification: {}", self.classify())
    }
}

fn table_border(columns: usize) -> String {
    let mut border = String::from("+----------");
    for _ in 0..columns {
        border.push_str("+-----------");
    }
    border.push('+');
    border
}

fn destination_cell(automaton: &Automaton, from: &State, on: Symbol) -> String {
    match automaton.destinations(from, on) {
        Some(destinations) => {
            let names: Vec<String> = destinations.iter().map(|s| s.to_string()).collect();
            format!("{{{}}}", names.join(","))
        }
        None => "{}".to_string(),
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Deterministic => write!(f, "deterministic"),
            Classification::NonDeterministic(reason) => {
                write!(f, "non-deterministic ({})", reason)
            }
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::EpsilonTransition => write!(f, "has epsilon transitions"),
            Reason::MultipleDestinations => {
                write!(f, "a symbol has multiple destinations from one state")
            }
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
