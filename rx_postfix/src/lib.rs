/**
 * Validation and infix-to-postfix translation for the restricted regex
 * dialect: alphanumeric literals, alternation, repetition and grouping.
 */

mod error;
mod token;
mod translate;
mod validate;

pub use error::Error;
pub use token::Token;
pub use translate::to_postfix;
pub use validate::{check, validate};
