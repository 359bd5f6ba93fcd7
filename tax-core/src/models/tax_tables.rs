use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{BracketTable, InvalidInputError, Province, TaxYearConfig};

/// Errors raised while assembling the tables for a tax year.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTablesError {
    #[error("no bracket table for {0}")]
    MissingProvince(Province),

    #[error("year constants are for {config_year}, tables are for {tax_year}")]
    YearMismatch { tax_year: i32, config_year: i32 },

    #[error("combined highest rate for {province} is {rate}, which exceeds 100%")]
    CombinedRateTooHigh { province: Province, rate: Decimal },
}

/// Read-only tax configuration for one tax year.
///
/// Built once at start-up and passed by reference into the calculations;
/// nothing in the crate holds it globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    tax_year: i32,
    federal: BracketTable,
    provincial: BTreeMap<Province, BracketTable>,
    config: TaxYearConfig,
}

impl TaxTables {
    /// Assembles the tables, requiring a schedule for every province.
    ///
    /// The highest federal rate plus the highest provincial rate must not
    /// exceed 100% for any province, so no income is taxed above itself.
    pub fn new(
        tax_year: i32,
        federal: BracketTable,
        provincial: BTreeMap<Province, BracketTable>,
        config: TaxYearConfig,
    ) -> Result<Self, TaxTablesError> {
        if config.tax_year != tax_year {
            return Err(TaxTablesError::YearMismatch {
                tax_year,
                config_year: config.tax_year,
            });
        }

        for province in Province::all() {
            let table = provincial
                .get(province)
                .ok_or(TaxTablesError::MissingProvince(*province))?;
            let rate = federal.max_rate() + table.max_rate();
            if rate > Decimal::ONE {
                return Err(TaxTablesError::CombinedRateTooHigh {
                    province: *province,
                    rate,
                });
            }
        }

        Ok(Self {
            tax_year,
            federal,
            provincial,
            config,
        })
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    pub fn federal(&self) -> &BracketTable {
        &self.federal
    }

    pub fn provincial(
        &self,
        province: Province,
    ) -> Result<&BracketTable, InvalidInputError> {
        self.provincial
            .get(&province)
            .ok_or_else(|| InvalidInputError::MissingProvincialTable(province.name().to_string()))
    }

    /// Looks up a provincial table by code or name.
    pub fn provincial_by_code(
        &self,
        code: &str,
    ) -> Result<&BracketTable, InvalidInputError> {
        let province: Province = code.parse()?;
        self.provincial(province)
    }

    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }
}
