use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{
    BasicPersonalAmount, BracketTable, BracketTableError, Province, TaxBracket, TaxTables,
    TaxTablesError, TaxYearConfig,
};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading tax tables.
#[derive(Debug, Error)]
pub enum TaxTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid jurisdiction '{0}' (expected FED or a province code)")]
    InvalidJurisdiction(String),

    #[error("No brackets for tax year {0}")]
    NoBracketsForYear(i32),

    #[error("No federal brackets for tax year {0}")]
    MissingFederal(i32),

    #[error("Invalid {jurisdiction} brackets: {source}")]
    InvalidBrackets {
        jurisdiction: Jurisdiction,
        #[source]
        source: BracketTableError,
    },

    #[error("Unknown province code '{0}' in sales tax rates")]
    InvalidSalesTaxProvince(String),

    #[error("Tax year {year} is not available (supported: {supported:?})")]
    UnsupportedYear { year: i32, supported: Vec<i32> },

    #[error(transparent)]
    Tables(#[from] TaxTablesError),
}

impl From<csv::Error> for TaxTableLoaderError {
    fn from(err: csv::Error) -> Self {
        TaxTableLoaderError::CsvParse(err.to_string())
    }
}

impl From<toml::de::Error> for TaxTableLoaderError {
    fn from(err: toml::de::Error) -> Self {
        TaxTableLoaderError::TomlParse(err.to_string())
    }
}

/// Who levies a bracket schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Jurisdiction {
    Federal,
    Provincial(Province),
}

impl FromStr for Jurisdiction {
    type Err = TaxTableLoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("FED") || trimmed.eq_ignore_ascii_case("federal") {
            return Ok(Jurisdiction::Federal);
        }
        Province::parse(trimmed)
            .map(Jurisdiction::Provincial)
            .ok_or_else(|| TaxTableLoaderError::InvalidJurisdiction(trimmed.to_string()))
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Jurisdiction::Federal => write!(f, "federal"),
            Jurisdiction::Provincial(province) => write!(f, "{province}"),
        }
    }
}

/// A single record from a tax brackets CSV file.
///
/// - `tax_year`: The tax year (e.g., 2024)
/// - `jurisdiction`: `FED` or a two-letter province/territory code
/// - `lower_bound`: Income at which the bracket starts
/// - `upper_bound`: Income at which it ends (empty for unlimited)
/// - `rate`: The marginal rate as a decimal (e.g., 0.205 for 20.5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub tax_year: i32,
    pub jurisdiction: String,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("inf") || s == "∞" => Ok(None),
        Some(s) => s
            .replace(',', "")
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
struct PayrollConstants {
    cpp_rate: Decimal,
    cpp_max: Decimal,
    ei_rate: Decimal,
    ei_max: Decimal,
}

/// Layout of a year-constants TOML file.
#[derive(Debug, Deserialize)]
struct YearConstants {
    tax_year: i32,
    gst_rate: Decimal,
    basic_personal_amount: BasicPersonalAmount,
    payroll: PayrollConstants,
    #[serde(default)]
    sales_tax: BTreeMap<String, Decimal>,
}

/// Loader for bracket schedules (CSV) and year constants (TOML).
pub struct TaxTableLoader;

impl TaxTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, TaxTableLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse the constants for one tax year from TOML text.
    pub fn parse_year_config(text: &str) -> Result<TaxYearConfig, TaxTableLoaderError> {
        let constants: YearConstants = toml::from_str(text)?;

        let mut sales_tax_rates = BTreeMap::new();
        for (code, rate) in constants.sales_tax {
            let province = Province::parse(&code)
                .ok_or(TaxTableLoaderError::InvalidSalesTaxProvince(code))?;
            sales_tax_rates.insert(province, rate);
        }

        Ok(TaxYearConfig {
            tax_year: constants.tax_year,
            basic_personal_amount: constants.basic_personal_amount,
            cpp_rate: constants.payroll.cpp_rate,
            cpp_max: constants.payroll.cpp_max,
            ei_rate: constants.payroll.ei_rate,
            ei_max: constants.payroll.ei_max,
            gst_rate: constants.gst_rate,
            sales_tax_rates,
        })
    }

    /// Groups the records for `config.tax_year` by jurisdiction and
    /// validates each schedule.
    ///
    /// Rows for other years are ignored. Rows within a jurisdiction may
    /// appear in any order; they are sorted by lower bound before the
    /// schedule is checked for gaps and overlaps.
    pub fn build_tables(
        records: &[TaxBracketRecord],
        config: TaxYearConfig,
    ) -> Result<TaxTables, TaxTableLoaderError> {
        let tax_year = config.tax_year;
        let mut groups: BTreeMap<Jurisdiction, Vec<TaxBracket>> = BTreeMap::new();

        for record in records.iter().filter(|r| r.tax_year == tax_year) {
            let jurisdiction: Jurisdiction = record.jurisdiction.parse()?;
            groups.entry(jurisdiction).or_default().push(TaxBracket::new(
                record.lower_bound,
                record.upper_bound,
                record.rate,
            ));
        }

        if groups.is_empty() {
            return Err(TaxTableLoaderError::NoBracketsForYear(tax_year));
        }

        let mut federal = None;
        let mut provincial = BTreeMap::new();
        for (jurisdiction, mut brackets) in groups {
            brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));
            let table = BracketTable::new(brackets).map_err(|source| {
                TaxTableLoaderError::InvalidBrackets {
                    jurisdiction,
                    source,
                }
            })?;
            debug!(%jurisdiction, brackets = table.brackets().len(), "loaded schedule");
            match jurisdiction {
                Jurisdiction::Federal => federal = Some(table),
                Jurisdiction::Provincial(province) => {
                    provincial.insert(province, table);
                }
            }
        }

        let federal = federal.ok_or(TaxTableLoaderError::MissingFederal(tax_year))?;
        Ok(TaxTables::new(tax_year, federal, provincial, config)?)
    }
}
