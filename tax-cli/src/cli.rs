use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tax_core::calculations::scenarios::MAX_INVESTMENT_YEARS;
use tax_core::{EmploymentType, InvalidInputError, Province};

use crate::utils::parse_decimal;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Canadian income tax burden and Tax Freedom Day calculator.
///
/// Loads the federal and provincial bracket tables for the requested tax
/// year and reports how much of an income goes to tax.
#[derive(Debug, Parser)]
#[command(name = "tax-freedom", version, about, long_about = None)]
pub struct Cli {
    /// TOML settings file with defaults for province, employment type and
    /// scenario options.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter ("error", "warn", "info", "debug", "trace" or a full
    /// directive). Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Tax year to use.
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// CSV file replacing the built-in bracket tables
    /// (`tax_year,jurisdiction,lower_bound,upper_bound,rate`).
    #[arg(long, global = true, value_name = "CSV")]
    pub brackets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full burden: income tax, CPP/EI, GST/HST, pay periods and freedom day.
    Report(ReportArgs),

    /// Income tax and the resulting Tax Freedom Day.
    FreedomDay(FreedomDayArgs),

    /// What a year's tax could have done instead.
    Scenarios(ScenarioArgs),

    /// Print bracket schedules.
    Brackets {
        /// Only print this province's schedule (federal is always shown).
        #[arg(long, short, value_parser = parse_province)]
        province: Option<Province>,
    },

    /// List provinces and territories with their top rates.
    Provinces,
}

/// Who the calculation is for.
#[derive(Debug, Args)]
pub struct PersonArgs {
    /// Annual gross income, e.g. 85000 or "$85,000".
    #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true)]
    pub income: Decimal,

    /// Province or territory code or name.
    #[arg(long, short, value_parser = parse_province)]
    pub province: Option<Province>,

    /// employee, self-employed or contractor.
    #[arg(long, value_parser = parse_employment_type)]
    pub employment: Option<EmploymentType>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub person: PersonArgs,

    /// Print the per-bracket breakdown as CSV instead of the report.
    #[arg(long)]
    pub csv: bool,
}

#[derive(Debug, Args)]
pub struct FreedomDayArgs {
    #[command(flatten)]
    pub person: PersonArgs,

    /// Use this total tax instead of computing it from the brackets.
    #[arg(long, value_parser = parse_decimal)]
    pub tax: Option<Decimal>,

    /// Print the per-bracket breakdown as CSV instead of the summary.
    #[arg(long, conflicts_with = "tax")]
    pub csv: bool,
}

#[derive(Debug, Args)]
pub struct ScenarioArgs {
    #[command(flatten)]
    pub person: PersonArgs,

    /// Years of investment growth to project (1 to 100).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_INVESTMENT_YEARS)))]
    pub years: Option<u32>,

    /// Current age, for the retirement projections.
    #[arg(long)]
    pub age: Option<u32>,

    /// Hours in a working day.
    #[arg(long, value_parser = parse_decimal)]
    pub hours: Option<Decimal>,

    #[arg(long, value_parser = parse_decimal)]
    pub credit_card: Option<Decimal>,

    #[arg(long, value_parser = parse_decimal)]
    pub student_loan: Option<Decimal>,

    #[arg(long, value_parser = parse_decimal)]
    pub car_loan: Option<Decimal>,

    #[arg(long, value_parser = parse_decimal)]
    pub mortgage: Option<Decimal>,
}

fn parse_province(s: &str) -> Result<Province, InvalidInputError> {
    s.parse()
}

fn parse_employment_type(s: &str) -> Result<EmploymentType, InvalidInputError> {
    s.parse()
}
