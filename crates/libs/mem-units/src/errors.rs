//! Error types.

use thiserror::Error;

/// Unable to parse a size.
///
/// Malformed input and sizes exceeding the representable range are reported alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid size {input:?}")]
pub struct ParseSizeError {
    input: Box<str>,
}

impl ParseSizeError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Original input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Unable to parse a bandwidth.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bandwidth {input:?}")]
pub struct ParseBandwidthError {
    input: Box<str>,
}

impl ParseBandwidthError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Original input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
