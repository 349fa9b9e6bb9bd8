//! Error types for finfmtlib

use thiserror::Error;

/// Errors that can occur at the parse boundary.
///
/// Display formatting itself never fails: every `format_*` function maps
/// these errors to a fixed fallback string. The error type exists so
/// callers that want to validate input up front (via
/// [`NumericInput::resolve`](crate::NumericInput::resolve) or
/// [`TimestampInput::resolve`](crate::TimestampInput::resolve)) get a
/// typed result instead of a sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinfmtError {
    /// Input string did not parse as a finite decimal number
    #[error("cannot parse '{input}' as a number")]
    InvalidNumber { input: String },

    /// Epoch seconds outside the representable date range
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}
