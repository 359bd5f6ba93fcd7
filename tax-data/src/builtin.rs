use std::io::Read;

use tax_core::{TaxTables, TaxYearConfig};
use tracing::debug;

use crate::loader::{TaxTableLoader, TaxTableLoaderError};

/// Published schedules and constants, keyed by tax year.
const BUILTIN: &[(i32, &str, &str)] = &[(
    2024,
    include_str!("../data/2024/brackets.csv"),
    include_str!("../data/2024/constants.toml"),
)];

/// Tax years with built-in tables, oldest first.
pub fn supported_years() -> Vec<i32> {
    BUILTIN.iter().map(|(year, _, _)| *year).collect()
}

fn builtin_entry(year: i32) -> Result<(&'static str, &'static str), TaxTableLoaderError> {
    BUILTIN
        .iter()
        .find(|(y, _, _)| *y == year)
        .map(|(_, brackets, constants)| (*brackets, *constants))
        .ok_or_else(|| TaxTableLoaderError::UnsupportedYear {
            year,
            supported: supported_years(),
        })
}

fn builtin_config(year: i32) -> Result<TaxYearConfig, TaxTableLoaderError> {
    let (_, constants) = builtin_entry(year)?;
    TaxTableLoader::parse_year_config(constants)
}

/// The federal and provincial tables shipped for `year`.
pub fn builtin_tables(year: i32) -> Result<TaxTables, TaxTableLoaderError> {
    let (brackets, _) = builtin_entry(year)?;
    let records = TaxTableLoader::parse(brackets.as_bytes())?;
    debug!(year, rows = records.len(), "loading built-in tables");
    TaxTableLoader::build_tables(&records, builtin_config(year)?)
}

/// Tables for `year` built from a user CSV, keeping the built-in year
/// constants.
///
/// The CSV must hold the federal schedule and all thirteen provincial and
/// territorial schedules for `year`.
pub fn tables_from_reader<R: Read>(
    reader: R,
    year: i32,
) -> Result<TaxTables, TaxTableLoaderError> {
    let config = builtin_config(year)?;
    let records = TaxTableLoader::parse(reader)?;
    debug!(year, rows = records.len(), "loading bracket override");
    TaxTableLoader::build_tables(&records, config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::{Province, compute_tax_for_province};

    use super::*;

    #[test]
    fn test_supported_years() {
        assert_eq!(supported_years(), vec![2024]);
    }

    #[test]
    fn test_builtin_2024_federal() {
        let tables = builtin_tables(2024).expect("2024 tables");
        let federal = tables.federal();

        assert_eq!(federal.brackets().len(), 5);
        assert_eq!(federal.brackets()[0].upper_bound, Some(dec!(53359)));
        assert_eq!(federal.top_rate(), dec!(0.33));
    }

    #[test]
    fn test_builtin_2024_has_every_province() {
        let tables = builtin_tables(2024).expect("2024 tables");

        for province in Province::all() {
            assert!(tables.provincial(*province).is_ok(), "missing {province}");
        }
        assert_eq!(tables.provincial(Province::BritishColumbia).unwrap().brackets().len(), 7);
        assert_eq!(tables.provincial(Province::Quebec).unwrap().top_rate(), dec!(0.2575));
        assert_eq!(tables.provincial(Province::Nunavut).unwrap().top_rate(), dec!(0.115));
    }

    #[test]
    fn test_builtin_2024_constants() {
        let tables = builtin_tables(2024).expect("2024 tables");
        let config = tables.config();

        assert_eq!(config.cpp_rate, dec!(0.0595));
        assert_eq!(config.ei_max, dec!(1002.45));
        assert_eq!(config.sales_tax_rate(Province::NovaScotia), dec!(0.15));
        assert_eq!(config.sales_tax_rate(Province::Quebec), dec!(0.05));
    }

    #[test]
    fn test_builtin_ontario_50k() {
        let tables = builtin_tables(2024).expect("2024 tables");

        let result = compute_tax_for_province(dec!(50000), Province::Ontario, &tables).unwrap();

        // 50000 * 0.15
        assert_eq!(result.federal_tax, dec!(7500.00));
        // 49231 * 0.0505 + 769 * 0.0915 = 2486.1655 + 70.3635
        assert_eq!(result.provincial_tax, dec!(2556.53));
        assert_eq!(result.total_tax, dec!(10056.53));
    }

    #[test]
    fn test_unsupported_year() {
        let err = builtin_tables(1999).expect_err("Should fail");

        match err {
            TaxTableLoaderError::UnsupportedYear { year, supported } => {
                assert_eq!(year, 1999);
                assert_eq!(supported, vec![2024]);
            }
            other => panic!("expected UnsupportedYear, got {other:?}"),
        }
    }

    #[test]
    fn test_tables_from_reader_uses_builtin_constants() {
        let (brackets, _) = builtin_entry(2024).unwrap();
        let csv = brackets.replace("2024,FED,235675,,0.33", "2024,FED,235675,,0.35");

        let tables = tables_from_reader(csv.as_bytes(), 2024).expect("override tables");

        assert_eq!(tables.federal().top_rate(), dec!(0.35));
        assert_eq!(tables.config().cpp_max, dec!(3754.45));
    }
}
