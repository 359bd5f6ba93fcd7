//! User settings file.
//!
//! An optional TOML file supplies defaults for the command-line flags:
//!
//! ```toml
//! province = "ON"
//! employment_type = "self-employed"
//! tax_year = 2024
//! working_hours = "7.5"
//! current_age = 42
//! investment_years = 25
//! ```
//!
//! Every key is optional. Flags given on the command line win over the
//! file, and the file wins over the built-in defaults.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::calculations::ScenarioOptions;
use tax_core::calculations::scenarios::validate_investment_years;
use tax_core::{EmploymentType, Province};
use thiserror::Error;
use tracing::debug;

/// Tax year used when neither a flag nor the settings file names one.
pub const DEFAULT_TAX_YEAR: i32 = 2024;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] tax_core::InvalidInputError),
}

/// Raw settings as written in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    province: Option<String>,
    employment_type: Option<String>,
    tax_year: Option<i32>,
    working_hours: Option<Decimal>,
    current_age: Option<u32>,
    investment_years: Option<u32>,
}

/// Defaults resolved from the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub province: Option<Province>,
    pub employment_type: EmploymentType,
    pub tax_year: i32,
    pub scenario: ScenarioOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            province: None,
            employment_type: EmploymentType::default(),
            tax_year: DEFAULT_TAX_YEAR,
            scenario: ScenarioOptions::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text, validating province and employment
    /// type names.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let raw: RawSettings = toml::from_str(text)?;
        let defaults = Settings::default();

        let province: Option<Province> = raw.province.as_deref().map(str::parse).transpose()?;
        let employment_type = match raw.employment_type.as_deref() {
            Some(s) => s.parse()?,
            None => defaults.employment_type,
        };

        let mut scenario = defaults.scenario;
        if let Some(hours) = raw.working_hours {
            scenario.working_hours = hours;
        }
        if let Some(age) = raw.current_age {
            scenario.current_age = age;
        }
        if let Some(years) = raw.investment_years {
            scenario.investment_years = validate_investment_years(years)?;
        }

        Ok(Self {
            province,
            employment_type,
            tax_year: raw.tax_year.unwrap_or(defaults.tax_year),
            scenario,
        })
    }

    /// Reads settings from `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings");
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn all_keys() {
        let text = r#"
province = "bc"
employment_type = "self-employed"
tax_year = 2024
working_hours = "7.5"
current_age = 42
investment_years = 25
"#;

        let settings = Settings::from_toml_str(text).unwrap();

        assert_eq!(settings.province, Some(Province::BritishColumbia));
        assert_eq!(settings.employment_type, EmploymentType::SelfEmployed);
        assert_eq!(settings.scenario.working_hours, dec!(7.5));
        assert_eq!(settings.scenario.current_age, 42);
        assert_eq!(settings.scenario.investment_years, 25);
    }

    #[test]
    fn unknown_province_is_rejected() {
        let err = Settings::from_toml_str(r#"province = "Atlantis""#).unwrap_err();

        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Settings::from_toml_str("filing_status = \"S\"").unwrap_err();

        assert!(matches!(err, SettingsError::Toml(_)));
    }

    #[test]
    fn investment_years_past_a_century_are_rejected() {
        let err = Settings::from_toml_str("investment_years = 1000").unwrap_err();

        assert!(matches!(
            err,
            SettingsError::Invalid(tax_core::InvalidInputError::InvestmentYearsOutOfRange {
                years: 1000,
                ..
            })
        ));
    }
}
