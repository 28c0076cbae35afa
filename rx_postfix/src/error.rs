/**
 * Rejection reasons for expressions that fail validation.
 */

use std::fmt;

/// Why an expression was rejected before any translation or construction
/// work started. Structural problems past this point are precondition
/// violations, not reportable errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The expression was empty.
    Empty,
    /// A character outside the literal alphabet and the operator set.
    IllegalCharacter(char),
    /// A `)` without a matching `(`, or a leftover `(` at end of input.
    UnbalancedParenthesis,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "empty expression"),
            Error::IllegalCharacter(c) => write!(f, "illegal character '{}' in expression", c),
            Error::UnbalancedParenthesis => write!(f, "unbalanced parentheses in expression"),
        }
    }
}

impl std::error::Error for Error {}
