//! Command dispatch.
//!
//! Resolves settings and tax tables once, then runs the selected
//! subcommand against them and writes the result to `out`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tax_core::calculations::scenarios::DebtBalances;
use tax_core::calculations::{ScenarioOptions, ScenarioReport, TaxBurdenCalculator, TaxBurdenInput};
use tax_core::{FreedomDay, Province, TaxTables, compute_tax_for_province};
use tracing::{debug, info};

use crate::cli::{Cli, Command, FreedomDayArgs, PersonArgs, ReportArgs, ScenarioArgs};
use crate::settings::Settings;
use crate::views::{
    BracketsView, FreedomDayView, ProvincesView, ReportView, ScenariosView, freedom_day_line,
    write_breakdown_csv,
};

/// Reads the settings file, or returns the built-in defaults when none is
/// given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from: {}", path.display())),
        None => Ok(Settings::default()),
    }
}

/// Built-in tables for `year`, or the bracket override in `brackets`.
pub fn load_tables(
    year: i32,
    brackets: Option<&Path>,
) -> Result<TaxTables> {
    match brackets {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open brackets file: {}", path.display()))?;
            tax_data::tables_from_reader(file, year)
                .with_context(|| format!("Failed to load brackets from: {}", path.display()))
        }
        None => tax_data::builtin_tables(year)
            .with_context(|| format!("Failed to load tax tables for {year}")),
    }
}

/// Resolved inputs shared by every subcommand.
pub struct App {
    pub settings: Settings,
    pub tables: TaxTables,
}

impl App {
    /// Loads settings and tables as directed by the global flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = load_settings(cli.config.as_deref())?;
        let year = cli.year.unwrap_or(settings.tax_year);
        debug!(year, "loading tax tables");
        let tables = load_tables(year, cli.brackets.as_deref())?;
        Ok(Self { settings, tables })
    }

    pub fn run<W: Write>(
        &self,
        command: &Command,
        out: &mut W,
    ) -> Result<()> {
        match command {
            Command::Report(args) => self.report(args, out),
            Command::FreedomDay(args) => self.freedom_day(args, out),
            Command::Scenarios(args) => self.scenarios(args, out),
            Command::Brackets { province } => self.brackets(*province, out),
            Command::Provinces => {
                writeln!(out, "{}", ProvincesView { tables: &self.tables })?;
                Ok(())
            }
        }
    }

    fn province(
        &self,
        person: &PersonArgs,
    ) -> Result<Province> {
        person.province.or(self.settings.province).ok_or_else(|| {
            anyhow!("no province given; pass --province or set `province` in the settings file")
        })
    }

    fn burden_input(
        &self,
        person: &PersonArgs,
    ) -> Result<TaxBurdenInput> {
        Ok(TaxBurdenInput {
            income: person.income,
            province: self.province(person)?,
            employment_type: person.employment.unwrap_or(self.settings.employment_type),
        })
    }

    fn report<W: Write>(
        &self,
        args: &ReportArgs,
        out: &mut W,
    ) -> Result<()> {
        let input = self.burden_input(&args.person)?;
        let burden = TaxBurdenCalculator::new(&self.tables).calculate(&input)?;
        info!(
            income = %burden.income,
            province = burden.province.code(),
            total = %burden.total_deductions,
            "report"
        );

        if args.csv {
            write_breakdown_csv(&burden.income_tax, out)?;
            return Ok(());
        }

        // No income, no freedom day; the rest of the report still applies.
        let year = self.tables.tax_year();
        let freedom_day_for = |tax| {
            (!burden.income.is_zero())
                .then(|| FreedomDay::for_year(burden.income, tax, year))
                .transpose()
                .context("Cannot derive Tax Freedom Day")
        };
        let freedom_day = freedom_day_for(burden.income_tax.total_tax)?;
        let freedom_day_with_payroll = freedom_day_for(burden.total_deductions)?;

        writeln!(
            out,
            "{}",
            ReportView {
                tax_year: year,
                burden: &burden,
                freedom_day,
                freedom_day_with_payroll,
            }
        )?;
        Ok(())
    }

    fn freedom_day<W: Write>(
        &self,
        args: &FreedomDayArgs,
        out: &mut W,
    ) -> Result<()> {
        let year = self.tables.tax_year();
        let income = args.person.income;

        if let Some(tax) = args.tax {
            let day = FreedomDay::for_year(income, tax, year)?;
            writeln!(out, "{}", freedom_day_line(day, year))?;
            return Ok(());
        }

        let province = self.province(&args.person)?;
        let result = compute_tax_for_province(income, province, &self.tables)?;

        if args.csv {
            write_breakdown_csv(&result, out)?;
            return Ok(());
        }

        let freedom_day = FreedomDay::for_year(income, result.total_tax, year)
            .context("Cannot derive Tax Freedom Day")?;
        writeln!(
            out,
            "{}",
            FreedomDayView {
                tax_year: year,
                province,
                result: &result,
                freedom_day,
            }
        )?;
        Ok(())
    }

    fn scenarios<W: Write>(
        &self,
        args: &ScenarioArgs,
        out: &mut W,
    ) -> Result<()> {
        let input = self.burden_input(&args.person)?;
        let burden = TaxBurdenCalculator::new(&self.tables).calculate(&input)?;

        let defaults = &self.settings.scenario;
        let options = ScenarioOptions {
            investment_years: args.years.unwrap_or(defaults.investment_years),
            current_age: args.age.unwrap_or(defaults.current_age),
            working_hours: args.hours.unwrap_or(defaults.working_hours),
            balances: DebtBalances {
                credit_card: args.credit_card.unwrap_or_default(),
                student_loan: args.student_loan.unwrap_or_default(),
                car_loan: args.car_loan.unwrap_or_default(),
                mortgage: args.mortgage.unwrap_or_default(),
            },
        };

        let report = ScenarioReport::build(burden.total_deductions, burden.rates.total, &options)?;
        writeln!(out, "{}", ScenariosView { report: &report })?;
        Ok(())
    }

    fn brackets<W: Write>(
        &self,
        province: Option<Province>,
        out: &mut W,
    ) -> Result<()> {
        let year = self.tables.tax_year();
        writeln!(
            out,
            "{}",
            BracketsView {
                title: format!("Federal ({year})"),
                table: self.tables.federal(),
            }
        )?;

        let provinces = match province {
            Some(province) => vec![province],
            None => Province::all().to_vec(),
        };
        for province in provinces {
            writeln!(
                out,
                "\n{}",
                BracketsView {
                    title: format!("{province} ({year})"),
                    table: self.tables.provincial(province)?,
                }
            )?;
        }
        Ok(())
    }
}
