//! Runs the batch loader and writer against on-disk fixtures.

use std::{fs::File, path::PathBuf};

use pretty_assertions::assert_eq;
use profit_cli::{
    app,
    batch::{self, BatchError},
};
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn fixture_scenarios_load_in_order() {
    let file = File::open(fixture_path("scenarios.csv")).unwrap();

    let scenarios = batch::load_scenarios(file).unwrap();

    assert_eq!(scenarios.len(), 4);
    assert_eq!(scenarios[0].turnover.value(), dec!(100000));
    assert_eq!(scenarios[1].sell_rate.value(), dec!(4.5));
    assert_eq!(scenarios[3].turnover.value(), dec!(1234567.89));
}

#[test]
fn fixture_results_match_hand_calculation() {
    let file = File::open(fixture_path("scenarios.csv")).unwrap();
    let scenarios = batch::load_scenarios(file).unwrap();
    let mut out = Vec::new();

    batch::write_results(&mut out, &scenarios).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "100000,1.0,0.7,210.00,105.00,315.00");
    assert_eq!(lines[2], "0,4.5,4.2,0.00,0.00,0.00");
    // Spread 0.001: 250000 * 0.001 * 0.30 = 75, * 0.15 = 37.5
    assert_eq!(lines[3], "250000,0.4,0.1,75.00,37.50,112.50");
    // Spread 0.047: 1234567.89 * 0.047 = 58024.69083
    // First half 17407.407249, second half 8703.7036245
    assert_eq!(lines[4], "1234567.89,5.0,4.7,17407.41,8703.70,26111.11");
}

#[test]
fn invalid_fixture_reports_offending_row() {
    let file = File::open(fixture_path("invalid_scenarios.csv")).unwrap();

    let err = batch::load_scenarios(file).unwrap_err();

    assert!(matches!(err, BatchError::InvalidSellRate { row: 2, .. }));
}

#[test]
fn run_batch_writes_output_file() {
    let output = std::env::temp_dir().join(format!("profit-batch-{}.csv", std::process::id()));

    let count = app::run_batch(&fixture_path("scenarios.csv"), Some(&output)).unwrap();

    assert_eq!(count, 4);
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("turnover,sell_rate,rate_difference,"));
    assert_eq!(written.lines().count(), 5);
    std::fs::remove_file(&output).unwrap();
}

#[test]
fn run_batch_fails_for_missing_file() {
    let result = app::run_batch(&fixture_path("does_not_exist.csv"), None);

    assert!(result.is_err());
}
