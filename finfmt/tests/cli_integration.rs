//! Integration tests for the finfmt CLI

use std::io::Write;
use std::process::Command;

fn run_finfmt(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "finfmt", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write fixture");
    file
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_finfmt(&["--help"]);

    assert!(success);
    assert!(stdout.contains("finfmt"));
    assert!(stdout.contains("value"));
    assert!(stdout.contains("table"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_finfmt(&["--version"]);

    assert!(success);
    assert!(stdout.contains("finfmt"));
}

#[test]
fn test_value_number() {
    let (stdout, _, success) = run_finfmt(&["value", "1234567.891", "--as", "number"]);

    assert!(success);
    assert_eq!(stdout.trim(), "1,234,567.89");
}

#[test]
fn test_value_currency() {
    let (stdout, _, success) = run_finfmt(&["value", "1234.5", "--as", "currency"]);

    assert!(success);
    assert_eq!(stdout.trim(), "$1,234.50");
}

#[test]
fn test_value_currency_code_and_precision() {
    let (stdout, _, success) = run_finfmt(&[
        "value", "1234.5", "--as", "currency", "--code", "CHF", "--precision", "1",
    ]);

    assert!(success);
    assert_eq!(stdout.trim(), "CHF 1,234.5");
}

#[test]
fn test_value_percent_fallback() {
    let (stdout, _, success) = run_finfmt(&["value", "not-a-number", "--as", "percent"]);

    assert!(success);
    assert_eq!(stdout.trim(), "0%");
}

#[test]
fn test_value_compact() {
    let (stdout, _, success) = run_finfmt(&["value", "2340000", "--as", "compact"]);

    assert!(success);
    assert_eq!(stdout.trim(), "2.34M");
}

#[test]
fn test_value_address() {
    let (stdout, _, success) = run_finfmt(&["value", "0x1234567890abcdef", "--as", "address"]);

    assert!(success);
    assert_eq!(stdout.trim(), "0x1234...cdef");
}

#[test]
fn test_value_timestamp() {
    let (stdout, _, success) = run_finfmt(&["value", "1700000000", "--as", "timestamp"]);

    assert!(success);
    assert_eq!(stdout.trim(), "2023-11-14 22:13:20 UTC");
}

#[test]
fn test_value_bad_timestamp_fails() {
    let (_, stderr, success) = run_finfmt(&["value", "soon", "--as", "timestamp"]);

    assert!(!success);
    assert!(stderr.contains("epoch seconds"));
}

#[test]
fn test_table_text_output() {
    let fixture = write_fixture(
        r#"[
            {"name": "USDC", "balance": 1250.5, "share": 41.27},
            {"name": "DAI", "balance": 3.0, "share": 0.1}
        ]"#,
    );
    let path = fixture.path().to_str().unwrap();

    let (stdout, _, success) = run_finfmt(&[
        "table",
        path,
        "--columns",
        "name,balance:currency,share:percent",
    ]);

    assert!(success);
    assert!(stdout.contains("name"));
    assert!(stdout.contains("balance"));
    assert!(stdout.contains("$1,250.50"));
    assert!(stdout.contains("41.27%"));
    // Row order preserved: USDC line before DAI line.
    let usdc = stdout.find("USDC").unwrap();
    let dai = stdout.find("DAI").unwrap();
    assert!(usdc < dai);
}

#[test]
fn test_table_json_output() {
    let fixture = write_fixture(r#"[{"name": "USDC", "balance": 1250.5}]"#);
    let path = fixture.path().to_str().unwrap();

    let (stdout, _, success) = run_finfmt(&[
        "table",
        path,
        "--columns",
        "name,balance:currency",
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["headers"][0]["text"], "name");
    assert_eq!(parsed["rows"][0][1]["text"], "$1,250.50");
}

#[test]
fn test_table_empty_rows_show_notice() {
    let fixture = write_fixture("[]");
    let path = fixture.path().to_str().unwrap();

    let (stdout, _, success) = run_finfmt(&["table", path, "--columns", "name,balance:currency"]);

    assert!(success);
    assert!(stdout.contains("name"));
    assert!(stdout.contains("No data"));
}

#[test]
fn test_table_unknown_column_kind_fails() {
    let fixture = write_fixture("[]");
    let path = fixture.path().to_str().unwrap();

    let (_, stderr, success) = run_finfmt(&["table", path, "--columns", "name:chart"]);

    assert!(!success);
    assert!(stderr.contains("unknown column kind"));
}
