//! Temporal display formatting.
//!
//! Integer timestamps are always epoch seconds (never milliseconds);
//! they are normalized to `DateTime<Utc>` before formatting. Like the
//! numeric formatter, nothing here panics: out-of-range timestamps
//! degrade to the fixed `"invalid date"` string.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::FinfmtError;
use crate::Result;

/// Fallback shown when a timestamp cannot be resolved
pub const INVALID_DATE: &str = "invalid date";

/// A timestamp accepted by the temporal formatting functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampInput {
    /// Seconds since the Unix epoch
    Seconds(i64),
    /// An already-constructed date/time value
    DateTime(DateTime<Utc>),
}

impl TimestampInput {
    /// Resolve to a `DateTime<Utc>`.
    pub fn resolve(&self) -> Result<DateTime<Utc>> {
        match self {
            TimestampInput::Seconds(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .ok_or(FinfmtError::TimestampOutOfRange(*secs)),
            TimestampInput::DateTime(dt) => Ok(*dt),
        }
    }
}

impl From<i64> for TimestampInput {
    fn from(secs: i64) -> Self {
        TimestampInput::Seconds(secs)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimestampInput::DateTime(dt)
    }
}

/// Format as an absolute date/time with a time-zone indicator.
///
/// ```
/// use finfmtlib::format_timestamp;
///
/// assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
/// ```
pub fn format_timestamp(timestamp: impl Into<TimestampInput>) -> String {
    match timestamp.into().resolve() {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Format as a relative "time ago" string.
///
/// The clock is sampled exactly once per call. Anything at least one
/// day old is expressed in whole days; there are no week, month, or
/// year buckets.
pub fn format_time_ago(timestamp: impl Into<TimestampInput>) -> String {
    format_time_ago_at(timestamp, Utc::now())
}

/// Relative formatting against an explicit reference instant.
///
/// This is the seam for deterministic tests and for callers that need
/// several values bucketed against the same instant. Elapsed time is
/// floored to whole seconds before bucketing. Future timestamps are not
/// special-cased: negative elapsed values fall through the same bucket
/// math (a timestamp 30s in the future reads `"-30s ago"`).
pub fn format_time_ago_at(
    timestamp: impl Into<TimestampInput>,
    now: DateTime<Utc>,
) -> String {
    let dt = match timestamp.into().resolve() {
        Ok(dt) => dt,
        Err(_) => return INVALID_DATE.to_string(),
    };

    let elapsed = (now - dt).num_seconds();

    if elapsed < 60 {
        format!("{elapsed}s ago")
    } else if elapsed < 3600 {
        format!("{}m ago", elapsed.div_euclid(60))
    } else if elapsed < 86400 {
        format!("{}h ago", elapsed.div_euclid(3600))
    } else {
        format!("{}d ago", elapsed.div_euclid(86400))
    }
}
