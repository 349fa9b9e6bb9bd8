//! # finfmtlib
//!
//! Display formatting for financial data: deterministic conversion of
//! raw values (numbers, numeric strings, timestamps) into display
//! strings, and a schema-driven table layer that consumes it.
//!
//! ## Overview
//!
//! Two layers, the first consumed by the second:
//!
//! - **Formatter**: pure functions mapping `(value, options)` to a
//!   display string. Fixed-precision numbers with thousands grouping,
//!   currency amounts, percentages, compact (K/M/B/T) notation,
//!   abbreviated addresses, absolute timestamps, and relative
//!   "time ago" strings. No function throws on malformed input; bad
//!   numeric input degrades to the fixed fallback `"0"`.
//! - **Tabular Renderer**: [`TableSpec`] projects an ordered column
//!   schema plus a row slice into a presentation-ready [`Grid`],
//!   delegating per-cell text to caller-supplied accessors. Ordering is
//!   preserved exactly; an empty row set still yields headers plus an
//!   explicit "no data" notice.
//!
//! Parsing is the single trust boundary (see [`NumericInput::resolve`]
//! and [`TimestampInput::resolve`]); once resolved, formatting is total.
//!
//! ## Example
//!
//! ```rust
//! use finfmtlib::{format_currency, format_percentage, Align, Column, TableSpec};
//!
//! struct Holding {
//!     asset: String,
//!     balance: f64,
//!     share: f64,
//! }
//!
//! let spec = TableSpec::new()
//!     .column(Column::new("Asset", |h: &Holding| h.asset.clone()))
//!     .column(
//!         Column::new("Balance", |h: &Holding| format_currency(h.balance, "USD", 2))
//!             .align(Align::Right),
//!     )
//!     .column(
//!         Column::new("Share", |h: &Holding| format_percentage(h.share, 2))
//!             .align(Align::Right),
//!     );
//!
//! let holdings = vec![Holding {
//!     asset: "USDC".to_string(),
//!     balance: 1250.5,
//!     share: 41.27,
//! }];
//!
//! let grid = spec.render(&holdings);
//! assert_eq!(grid.headers[0].text, "Asset");
//! assert_eq!(grid.rows[0][1].text, "$1,250.50");
//! assert_eq!(grid.rows[0][2].text, "41.27%");
//! ```

pub mod error;
pub mod format;
pub mod numeric;
pub mod options;
pub mod table;
pub mod theme;
pub mod time;

pub use error::FinfmtError;
pub use format::{
    format_address, format_compact_number, format_currency, format_percentage,
    format_with_precision, FALLBACK,
};
pub use numeric::NumericInput;
pub use options::{FormatOptions, Locale};
pub use table::{Align, Cell, Column, Density, Grid, TableSpec, EMPTY_NOTICE};
pub use theme::{MemoryThemeStore, ThemeContext, ThemeMode, ThemeStore};
pub use time::{
    format_time_ago, format_time_ago_at, format_timestamp, TimestampInput, INVALID_DATE,
};

/// Result type for finfmtlib operations
pub type Result<T> = std::result::Result<T, FinfmtError>;
