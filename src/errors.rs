//! Error types for object location parsing.

use thiserror::Error;

/// Returned by [`ObjectLocation::parse`](crate::ObjectLocation::parse) when
/// the input does not match the `bucket/key` grammar.
///
/// Carries the canonical form of the rejected input so callers can report
/// exactly what was provided. There is no finer-grained failure reason; every
/// grammar mismatch collapses into this one error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("object location `{input}` is not a valid `bucket/key` string")]
pub struct InvalidLocation {
    input: String,
}

impl InvalidLocation {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The raw input that failed to parse, in its canonical composite form.
    pub fn input(&self) -> &str {
        &self.input
    }
}
