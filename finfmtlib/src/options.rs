//! Formatting options.
//!
//! This module contains the configuration types that control how
//! numeric values are rendered.

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_percentage, format_with_precision};
use crate::numeric::NumericInput;

/// Supported display locale.
///
/// Exactly one locale is supported; the enum exists so the separator
/// conventions live in one place rather than as scattered literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US): `.` decimal separator, `,` grouping
    #[default]
    EnUs,
}

impl Locale {
    /// Decimal separator character
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs => '.',
        }
    }

    /// Thousands grouping separator character
    pub fn group_separator(&self) -> char {
        match self {
            Locale::EnUs => ',',
        }
    }
}

/// Bundled options for numeric formatting.
///
/// `precision` bounds both the minimum and maximum number of fraction
/// digits shown (exact, not "up to").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Exact number of fraction digits
    pub precision: usize,
    /// ISO 4217 currency code used by [`FormatOptions::currency`]
    pub currency_code: String,
    /// Display locale
    pub locale: Locale,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            currency_code: "USD".to_string(),
            locale: Locale::EnUs,
        }
    }
}

impl FormatOptions {
    /// Create options with the defaults (precision 2, USD, en-US)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set fraction-digit count
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder: set the ISO 4217 currency code
    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    /// Format a plain number with these options
    pub fn number(&self, value: impl Into<NumericInput>) -> String {
        format_with_precision(value, self.precision)
    }

    /// Format a currency amount with these options
    pub fn currency(&self, value: impl Into<NumericInput>) -> String {
        format_currency(value, &self.currency_code, self.precision)
    }

    /// Format a percentage with these options
    pub fn percentage(&self, value: impl Into<NumericInput>) -> String {
        format_percentage(value, self.precision)
    }
}
