//! The numeric parse boundary.
//!
//! Callers hand the formatter either a ready number or raw text. This
//! module is the single place where text becomes a number: everything
//! downstream of [`NumericInput::resolve`] operates on a finite `f64`
//! and cannot fail.

use crate::error::FinfmtError;
use crate::Result;

/// A value accepted by the numeric formatting functions.
///
/// Text input uses the invariant decimal grammar: `.` as the decimal
/// separator, optional leading `-`, no grouping separators. Anything
/// else resolves to an error, never a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// An already-numeric value
    Number(f64),
    /// Raw text to be parsed
    Text(String),
}

impl NumericInput {
    /// Resolve to a finite `f64`.
    ///
    /// Non-finite values are rejected alongside unparseable text: the
    /// formatting layer treats both as the same fallback case, so the
    /// literal texts `"inf"` and `"NaN"` (which Rust's float grammar
    /// would otherwise accept) also resolve to `InvalidNumber`.
    pub fn resolve(&self) -> Result<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| FinfmtError::InvalidNumber { input: s.clone() })?
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FinfmtError::InvalidNumber {
                input: match self {
                    NumericInput::Number(n) => n.to_string(),
                    NumericInput::Text(s) => s.clone(),
                },
            })
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}
