//! Version parse error.

use thiserror::Error;

/// A version string did not match the accepted grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid version '{input}': {reason}")]
pub struct InvalidVersionError {
    /// The rejected input, as given.
    pub input: String,
    /// What the parser tripped over.
    pub reason: String,
}

impl InvalidVersionError {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
