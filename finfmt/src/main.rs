//! # finfmt
//!
//! A CLI for formatting financial values and rendering JSON records as
//! tables, built on top of finfmtlib.
//!
//! ## Usage
//!
//! ```bash
//! # Format a single value
//! finfmt value 1234.5 --as currency
//! finfmt value 1234.5 --as currency --code EUR --precision 0
//! finfmt value 1700000000 --as ago
//!
//! # Render a JSON array of objects as a table
//! finfmt table holdings.json --columns "name,balance:currency,share:percent"
//!
//! # Same data as a JSON grid
//! finfmt table holdings.json --columns "name,balance:currency" --output json
//!
//! # Tighter spacing, dark header styling
//! finfmt table holdings.json --columns "name,balance:currency" --dense --theme dark
//! ```

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use finfmtlib::{
    format_address, format_compact_number, format_currency, format_percentage, format_time_ago,
    format_timestamp, format_with_precision, Align, Column, Density, MemoryThemeStore,
    NumericInput, TableSpec, ThemeContext, ThemeMode, TimestampInput, INVALID_DATE,
};
use serde_json::Value;

mod render;

/// How a column (or single value) should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Text,
    Number,
    Currency,
    Percent,
    Compact,
    Address,
    Timestamp,
    Ago,
}

impl ColumnKind {
    /// Numeric and temporal columns read better right-aligned
    fn align(self) -> Align {
        match self {
            ColumnKind::Text | ColumnKind::Address => Align::Left,
            _ => Align::Right,
        }
    }
}

impl FromStr for ColumnKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ColumnKind::Text),
            "number" => Ok(ColumnKind::Number),
            "currency" => Ok(ColumnKind::Currency),
            "percent" => Ok(ColumnKind::Percent),
            "compact" => Ok(ColumnKind::Compact),
            "address" => Ok(ColumnKind::Address),
            "timestamp" => Ok(ColumnKind::Timestamp),
            "ago" => Ok(ColumnKind::Ago),
            _ => Err(anyhow!("unknown column kind: {s}")),
        }
    }
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("finfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format financial values and render JSON records as tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("value")
                .about("Format a single value")
                .arg(Arg::new("value").required(true).help("Value to format"))
                .arg(
                    Arg::new("as")
                        .long("as")
                        .default_value("number")
                        .value_parser([
                            "text",
                            "number",
                            "currency",
                            "percent",
                            "compact",
                            "address",
                            "timestamp",
                            "ago",
                        ])
                        .help("Output kind"),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .default_value("2")
                        .help("Fraction digits for number/currency/percent"),
                )
                .arg(
                    Arg::new("code")
                        .short('c')
                        .long("code")
                        .default_value("USD")
                        .help("ISO 4217 currency code"),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Render a JSON array of objects as a table")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .help("Path to a JSON file holding an array of objects"),
                )
                .arg(
                    Arg::new("columns")
                        .long("columns")
                        .required(true)
                        .help("Comma-separated field[:kind] entries, in display order"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .default_value("table")
                        .value_parser(["table", "json"])
                        .help("Output format"),
                )
                .arg(
                    Arg::new("dense")
                        .long("dense")
                        .action(ArgAction::SetTrue)
                        .help("Tighter column spacing"),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .default_value("light")
                        .value_parser(["light", "dark"])
                        .help("Header styling theme"),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .default_value("2")
                        .help("Fraction digits for numeric columns"),
                )
                .arg(
                    Arg::new("code")
                        .short('c')
                        .long("code")
                        .default_value("USD")
                        .help("ISO 4217 currency code for currency columns"),
                ),
        )
}

/// Pull a field out of a JSON object row as numeric-formatter input
fn numeric_input(row: &Value, field: &str) -> NumericInput {
    match row.get(field) {
        Some(Value::Number(n)) => NumericInput::Number(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => NumericInput::Text(s.clone()),
        _ => NumericInput::Text(String::new()),
    }
}

/// Pull a field out of a JSON object row as epoch seconds
fn timestamp_input(row: &Value, field: &str) -> Option<TimestampInput> {
    match row.get(field) {
        Some(Value::Number(n)) => n.as_i64().map(TimestampInput::from),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok().map(TimestampInput::from),
        _ => None,
    }
}

/// Pull a field out of a JSON object row as plain display text
fn text_value(row: &Value, field: &str) -> String {
    match row.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Build one table column for a `field[:kind]` spec entry
fn build_column(field: String, kind: ColumnKind, precision: usize, code: String) -> Column<Value> {
    let header = field.clone();
    let column = match kind {
        ColumnKind::Text => Column::new(header, move |row: &Value| text_value(row, &field)),
        ColumnKind::Number => Column::new(header, move |row: &Value| {
            format_with_precision(numeric_input(row, &field), precision)
        }),
        ColumnKind::Currency => Column::new(header, move |row: &Value| {
            format_currency(numeric_input(row, &field), &code, precision)
        }),
        ColumnKind::Percent => Column::new(header, move |row: &Value| {
            format_percentage(numeric_input(row, &field), precision)
        }),
        ColumnKind::Compact => Column::new(header, move |row: &Value| {
            format_compact_number(numeric_input(row, &field))
        }),
        ColumnKind::Address => {
            let column = Column::new(header, move |row: &Value| {
                format_address(&text_value(row, &field))
            });
            return column.align(kind.align()).style_hint("muted");
        }
        ColumnKind::Timestamp => Column::new(header, move |row: &Value| {
            match timestamp_input(row, &field) {
                Some(ts) => format_timestamp(ts),
                None => INVALID_DATE.to_string(),
            }
        }),
        ColumnKind::Ago => Column::new(header, move |row: &Value| {
            match timestamp_input(row, &field) {
                Some(ts) => format_time_ago(ts),
                None => INVALID_DATE.to_string(),
            }
        }),
    };
    column.align(kind.align())
}

/// Parse the `--columns` spec into table columns
fn parse_columns(spec: &str, precision: usize, code: &str) -> anyhow::Result<Vec<Column<Value>>> {
    let mut columns = Vec::new();
    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(anyhow!("empty column entry in --columns"));
        }
        let (field, kind) = match entry.split_once(':') {
            Some((field, kind)) => (field, ColumnKind::from_str(kind)?),
            None => (entry, ColumnKind::Text),
        };
        columns.push(build_column(
            field.to_string(),
            kind,
            precision,
            code.to_string(),
        ));
    }
    Ok(columns)
}

fn parse_precision(matches: &ArgMatches) -> anyhow::Result<usize> {
    let raw = matches
        .get_one::<String>("precision")
        .map(|s| s.as_str())
        .unwrap_or("2");
    raw.parse::<usize>()
        .with_context(|| format!("invalid precision: {raw}"))
}

/// Handler for the `value` subcommand
fn value_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let raw = matches
        .get_one::<String>("value")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let kind = matches
        .get_one::<String>("as")
        .map(|s| s.as_str())
        .unwrap_or("number")
        .parse::<ColumnKind>()?;
    let precision = parse_precision(matches)?;
    let code = matches
        .get_one::<String>("code")
        .map(|s| s.as_str())
        .unwrap_or("USD");

    let formatted = match kind {
        ColumnKind::Text => raw.to_string(),
        ColumnKind::Number => format_with_precision(raw, precision),
        ColumnKind::Currency => format_currency(raw, code, precision),
        ColumnKind::Percent => format_percentage(raw, precision),
        ColumnKind::Compact => format_compact_number(raw),
        ColumnKind::Address => format_address(raw),
        ColumnKind::Timestamp => {
            let secs = raw
                .parse::<i64>()
                .with_context(|| format!("timestamp must be epoch seconds: {raw}"))?;
            format_timestamp(secs)
        }
        ColumnKind::Ago => {
            let secs = raw
                .parse::<i64>()
                .with_context(|| format!("timestamp must be epoch seconds: {raw}"))?;
            format_time_ago(secs)
        }
    };

    Ok(formatted)
}

/// Handler for the `table` subcommand
fn table_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let columns_spec = matches
        .get_one::<String>("columns")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let precision = parse_precision(matches)?;
    let code = matches
        .get_one::<String>("code")
        .map(|s| s.as_str())
        .unwrap_or("USD");

    let raw = std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    let rows: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{path} is not a JSON array of objects"))?;

    let mut spec = TableSpec::new();
    for column in parse_columns(columns_spec, precision, code)? {
        spec = spec.column(column);
    }
    if matches.get_flag("dense") {
        spec = spec.density(Density::Dense);
    }

    let grid = spec.render(&rows);

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");
    if output == "json" {
        return Ok(serde_json::to_string_pretty(&grid)?);
    }

    let mode = match matches.get_one::<String>("theme").map(|s| s.as_str()) {
        Some("dark") => ThemeMode::Dark,
        _ => ThemeMode::Light,
    };
    let theme = ThemeContext::init(Box::new(MemoryThemeStore::with_mode(mode)));
    let rendered = render::render_grid(&grid, theme.mode());
    theme.teardown();

    Ok(rendered)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("value", sub)) => value_handler(sub),
        Some(("table", sub)) => table_handler(sub),
        _ => unreachable!("subcommand_required"),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
