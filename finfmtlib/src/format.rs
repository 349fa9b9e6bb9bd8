//! Numeric display formatting.
//!
//! Every function here is total: unparseable or non-finite input
//! degrades to the fixed fallback string `"0"` instead of failing.
//! These functions run inside rendering paths, so they must never
//! panic or return a partially formatted string.

use crate::numeric::NumericInput;
use crate::options::Locale;

/// Fallback shown when numeric input cannot be resolved
pub const FALLBACK: &str = "0";

/// Format with thousands grouping and exactly `precision` fraction digits.
///
/// Precision bounds both the minimum and maximum fraction digits: a
/// precision of 0 yields no decimal separator at all. Unparseable input
/// yields [`FALLBACK`].
///
/// ```
/// use finfmtlib::format_with_precision;
///
/// assert_eq!(format_with_precision(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_with_precision("not a number", 2), "0");
/// ```
pub fn format_with_precision(value: impl Into<NumericInput>, precision: usize) -> String {
    match value.into().resolve() {
        Ok(v) => format_fixed(v, precision, Locale::EnUs),
        Err(_) => FALLBACK.to_string(),
    }
}

/// Format as a currency amount with exactly `precision` fraction digits.
///
/// Known codes render with their symbol (`$1,234.50`); other ISO 4217
/// codes render as `CODE 1,234.50`. The sign precedes the symbol.
///
/// The fallback for unparseable input is the bare `"0"` with no
/// currency symbol, matching the behavior callers already rely on.
pub fn format_currency(value: impl Into<NumericInput>, code: &str, precision: usize) -> String {
    let v = match value.into().resolve() {
        Ok(v) => v,
        Err(_) => return FALLBACK.to_string(),
    };

    let sign = if v < 0.0 { "-" } else { "" };
    let magnitude = format_fixed(v.abs(), precision, Locale::EnUs);

    match currency_symbol(code) {
        Some(symbol) => format!("{sign}{symbol}{magnitude}"),
        None => format!("{sign}{code} {magnitude}"),
    }
}

/// Format as a percentage: the plain formatted number with a `%` suffix.
///
/// Defined as exactly `format_with_precision(value, precision) + "%"`,
/// so the fallback path yields `"0%"`.
pub fn format_percentage(value: impl Into<NumericInput>, precision: usize) -> String {
    format!("{}%", format_with_precision(value, precision))
}

/// Format in compact notation with K/M/B/T suffixes.
///
/// At most 2 fraction digits are shown; trailing zeros are trimmed.
///
/// ```
/// use finfmtlib::format_compact_number;
///
/// assert_eq!(format_compact_number(1_500_000.0), "1.5M");
/// assert_eq!(format_compact_number(2_340.0), "2.34K");
/// ```
pub fn format_compact_number(value: impl Into<NumericInput>) -> String {
    let v = match value.into().resolve() {
        Ok(v) => v,
        Err(_) => return FALLBACK.to_string(),
    };

    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();

    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };

    let fixed = format!("{scaled:.2}");
    format!("{sign}{}{suffix}", trim_fraction(&fixed))
}

/// Abbreviate an identifier: first 6 characters, `"..."`, last 4.
///
/// The empty string maps to the empty string. There is no minimum-length
/// guard: inputs shorter than 10 characters produce overlapping head and
/// tail segments. Callers that need loss-free truncation must check the
/// length themselves.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();

    format!("{head}...{tail}")
}

/// Symbol for well-known currency codes; `None` falls back to the code itself
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        _ => None,
    }
}

/// Fixed-point rendering with grouping; input must be finite
fn format_fixed(value: f64, precision: usize, locale: Locale) -> String {
    let fixed = format!("{:.precision$}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, locale.group_separator()));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator());
        out.push_str(frac);
    }
    out
}

/// Insert a grouping separator every three digits, right to left
fn group_thousands(digits: &str, separator: char) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(separator);
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}

/// Strip trailing fraction zeros (and a then-dangling decimal point)
fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_is_exact() {
        assert_eq!(format_with_precision(1234.5, 2), "1,234.50");
        assert_eq!(format_with_precision(1234.5678, 2), "1,234.57");
        assert_eq!(format_with_precision(0.1, 4), "0.1000");
    }

    #[test]
    fn test_precision_zero_has_no_separator() {
        assert_eq!(format_with_precision(1234.4, 0), "1,234");
        assert!(!format_with_precision(99.9, 0).contains('.'));
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_with_precision(1234567.0, 0), "1,234,567");
        assert_eq!(format_with_precision(999.0, 0), "999");
        assert_eq!(format_with_precision(1000.0, 0), "1,000");
    }

    #[test]
    fn test_negative_preserves_magnitude() {
        assert_eq!(format_with_precision(-1234.5, 2), "-1,234.50");
        assert_eq!(
            format_with_precision(-1234.5, 2),
            format!("-{}", format_with_precision(1234.5, 2))
        );
    }

    #[test]
    fn test_string_input() {
        assert_eq!(format_with_precision("1234.5", 2), "1,234.50");
        assert_eq!(format_with_precision("-42", 1), "-42.0");
    }

    #[test]
    fn test_fallback_on_garbage() {
        assert_eq!(format_with_precision("abc", 2), "0");
        assert_eq!(format_with_precision("abc", 0), "0");
        assert_eq!(format_with_precision("", 5), "0");
        assert_eq!(format_with_precision(f64::NAN, 2), "0");
        assert_eq!(format_with_precision(f64::INFINITY, 2), "0");
    }

    #[test]
    fn test_currency_usd() {
        assert_eq!(format_currency(1234.5, "USD", 2), "$1,234.50");
        assert_eq!(format_currency(-1234.5, "USD", 2), "-$1,234.50");
    }

    #[test]
    fn test_currency_known_symbols() {
        assert_eq!(format_currency(10.0, "EUR", 2), "\u{20ac}10.00");
        assert_eq!(format_currency(10.0, "GBP", 2), "\u{a3}10.00");
        assert_eq!(format_currency(10.0, "JPY", 0), "\u{a5}10");
    }

    #[test]
    fn test_currency_unknown_code_uses_code() {
        assert_eq!(format_currency(1234.5, "CHF", 2), "CHF 1,234.50");
        assert_eq!(format_currency(-1.0, "CHF", 2), "-CHF 1.00");
    }

    #[test]
    fn test_currency_fallback_drops_symbol() {
        // The symbol is intentionally absent on the fallback path.
        assert_eq!(format_currency("n/a", "USD", 2), "0");
        assert_eq!(format_currency("n/a", "CHF", 2), "0");
    }

    #[test]
    fn test_percentage_composes_with_precision() {
        assert_eq!(format_percentage(12.34, 2), "12.34%");
        assert_eq!(
            format_percentage(12.345, 2),
            format!("{}%", format_with_precision(12.345, 2))
        );
    }

    #[test]
    fn test_percentage_fallback() {
        assert_eq!(format_percentage("oops", 2), "0%");
    }

    #[test]
    fn test_compact_suffixes() {
        assert_eq!(format_compact_number(950.0), "950");
        assert_eq!(format_compact_number(1_500.0), "1.5K");
        assert_eq!(format_compact_number(2_340_000.0), "2.34M");
        assert_eq!(format_compact_number(7_000_000_000.0), "7B");
        assert_eq!(format_compact_number(1_200_000_000_000.0), "1.2T");
    }

    #[test]
    fn test_compact_trims_trailing_zeros() {
        assert_eq!(format_compact_number(1_000_000.0), "1M");
        assert_eq!(format_compact_number(1_100_000.0), "1.1M");
        assert_eq!(format_compact_number(123.456), "123.46");
    }

    #[test]
    fn test_compact_sign_and_fallback() {
        assert_eq!(format_compact_number(-1_500_000.0), "-1.5M");
        assert_eq!(format_compact_number("junk"), "0");
    }

    #[test]
    fn test_address_shape() {
        let formatted = format_address("0x1234567890abcdef");
        assert!(formatted.starts_with("0x1234"));
        assert!(formatted.contains("..."));
        assert!(formatted.ends_with("cdef"));
        assert_eq!(formatted, "0x1234...cdef");
    }

    #[test]
    fn test_address_empty() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_address_short_input_overlaps_without_panic() {
        // No minimum-length guard: segments overlap, but never panic.
        assert_eq!(format_address("abc"), "abc...abc");
        assert_eq!(format_address("abcdefgh"), "abcdef...efgh");
    }
}
