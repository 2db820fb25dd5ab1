//! Error types for configuring formatters and compiling patterns.

use thiserror::Error;

use crate::property::{PropertyKey, ValueKind};

/// Errors returned by the formatter facade.
///
/// Failing to parse a date is not an error: it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterError {
    #[error("{operation} is not supported by this formatter")]
    Unsupported { operation: &'static str },

    #[error("property {key} expects a {expected} value, got {got}")]
    KindMismatch {
        key: PropertyKey,
        expected: ValueKind,
        got: ValueKind,
    },
}

/// Errors that can occur when compiling a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown pattern field at position {position}: found '{found}'")]
    UnknownField { position: usize, found: char },

    #[error("unterminated quote starting at position {position}")]
    UnterminatedQuote { position: usize },
}
