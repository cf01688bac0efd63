//! Parse error for textual boards and positions.

use derive_more::{Display, Error};

/// Failure to parse a board or position from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {:?} as {}", input, expected)]
pub struct ParseError {
    /// The offending input.
    pub input: String,
    /// What the input was expected to describe.
    pub expected: &'static str,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }
}
