//! End-to-end tests that parse a command line and run it against the
//! built-in tables, capturing what would be printed.

use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::assert_eq;
use tax_cli::app::App;
use tax_cli::cli::Cli;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("tax-freedom").chain(args.iter().copied()))?;
    let app = App::from_cli(&cli)?;
    let mut out = Vec::new();
    app.run(&cli.command, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_freedom_day_from_explicit_tax() {
    let output = run(&["freedom-day", "--income", "100000", "--tax", "25000"]).unwrap();

    // 25000 * 366 / 100000 = 91.5, rounded up
    assert_eq!(output, "day 92 (April 1, 2024)\n");
}

#[test]
fn test_freedom_day_rejects_tax_above_income() {
    let err = run(&["freedom-day", "--income", "1000", "--tax", "2000"]).unwrap_err();

    assert!(err.to_string().contains("exceeds"), "got: {err}");
}

#[test]
fn test_freedom_day_summary() {
    let output = run(&["freedom-day", "--income", "50000", "--province", "ON"]).unwrap();

    assert!(output.contains("Total tax:       $10,056.53"), "got:\n{output}");
    assert!(output.contains("Marginal rate:   24.15%"), "got:\n{output}");
    // 10056.53 * 366 / 50000 = 73.61
    assert!(output.contains("day 74 (March 14, 2024)"), "got:\n{output}");
}

#[test]
fn test_freedom_day_csv_breakdown() {
    let output =
        run(&["freedom-day", "--income", "50000", "--province", "ON", "--csv"]).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "jurisdiction,lower_bound,upper_bound,rate,taxable_amount,tax",
            "federal,0,53359,0.15,50000,7500.00",
            "provincial,0,49231,0.0505,49231,2486.17",
            "provincial,49231,98463,0.0915,769,70.36",
        ]
    );
}

#[test]
fn test_report_uses_settings_file() {
    let settings = fixture("settings.toml");
    let output = run(&["report", "--income", "50000", "--config", &settings]).unwrap();

    assert!(output.contains("Province:              Ontario"), "got:\n{output}");
    // Federal tax after the basic personal amount: (50000 - 15000) * 15%
    assert!(output.contains("$5,250.00"), "got:\n{output}");
    assert!(output.contains("$2,556.53"), "got:\n{output}");
    assert!(output.contains("$2,975.00"), "got:\n{output}");
    assert!(output.contains("$815.00"), "got:\n{output}");
    assert!(output.contains("$11,596.53"), "got:\n{output}");
    assert!(output.contains("day 58 (February 27, 2024)"), "got:\n{output}");
    assert!(output.contains("day 85 (March 25, 2024)"), "got:\n{output}");
}

#[test]
fn test_report_zero_income_has_no_freedom_day() {
    let output = run(&["report", "--income", "0", "--province", "ON"]).unwrap();

    assert!(output.contains("Total deductions:      $0.00"), "got:\n{output}");
    assert!(output.contains("Tax Freedom Day:       n/a"), "got:\n{output}");
    assert!(output.contains("  with CPP and EI:     n/a"), "got:\n{output}");
}

#[test]
fn test_scenarios_reject_years_past_a_century() {
    let err = run(&["scenarios", "--income", "50000", "--province", "ON", "--years", "1000"])
        .unwrap_err();

    assert!(err.to_string().contains("1000"), "got: {err}");
}

#[test]
fn test_report_without_province_fails() {
    let err = run(&["report", "--income", "50000"]).unwrap_err();

    assert!(err.to_string().contains("no province given"), "got: {err}");
}

#[test]
fn test_report_negative_income_fails() {
    let err = run(&["report", "--income", "-1", "--province", "AB"]).unwrap_err();

    assert!(err.to_string().contains("negative"), "got: {err}");
}

#[test]
fn test_unsupported_year_lists_supported() {
    let err = run(&["provinces", "--year", "1999"]).unwrap_err();

    assert!(format!("{err:#}").contains("2024"), "got: {err:#}");
}

#[test]
fn test_scenarios_use_settings_defaults() {
    let settings = fixture("settings.toml");
    let output = run(&["scenarios", "--income", "50000", "--config", &settings]).unwrap();

    assert!(output.contains("Annual tax: $11,596.53"), "got:\n{output}");
    assert!(output.contains("for 10 years"), "got:\n{output}");
    // Current age 40 leaves all three retirement ages.
    assert!(output.contains("Age 55 (15 years)"), "got:\n{output}");
    assert!(output.contains("Of a 8-hour day"), "got:\n{output}");
}

#[test]
fn test_brackets_single_province() {
    let output = run(&["brackets", "--province", "nunavut"]).unwrap();

    assert!(output.starts_with("Federal (2024)"), "got:\n{output}");
    assert!(output.contains("Nunavut (2024)"), "got:\n{output}");
    assert!(!output.contains("Ontario"), "got:\n{output}");
    assert!(output.contains("11.50%"), "got:\n{output}");
}

#[test]
fn test_provinces_lists_all() {
    let output = run(&["provinces"]).unwrap();

    assert_eq!(output.lines().count(), 14);
    assert!(output.contains("ON    Ontario"), "got:\n{output}");
}
