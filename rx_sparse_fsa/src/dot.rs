/**
 * Graphviz export of an automaton, for eyeballing constructions.
 */

use crate::nfa::Automaton;

impl Automaton {
    /// Renders the automaton as a Graphviz digraph. Accepting states are
    /// double circles; a point node marks the start state.
    pub fn dot(&self) -> String {
        let mut out = String::from("digraph nfa {\n");
        out.push_str("    rankdir=LR;\n");
        out.push_str("    start [shape = point];\n");

        for state in self.states() {
            let shape = if self.is_accepting(&state) {
                "doublecircle"
            }
            else {
                "circle"
            };
            out.push_str(&format!("    {} [shape = {}];\n", state, shape));
        }
        out.push_str(&format!("    start -> {};\n", self.start));

        for state in self.states() {
            if let Some(on_map) = self.transitions_from(&state) {
                for (symbol, destinations) in on_map {
                    for destination in destinations {
                        out.push_str(&format!(
                            "    {} -> {} [label = \"{}\"];\n",
                            state, destination, symbol
                        ));
                    }
                }
            }
        }

        out.push_str("}\n");
        out
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
