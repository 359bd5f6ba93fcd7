use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// Canadian provinces and territories with their own income tax schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NovaScotia,
    NorthwestTerritories,
    Nunavut,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    Yukon,
}

impl Province {
    pub fn all() -> &'static [Province] {
        &[
            Province::Alberta,
            Province::BritishColumbia,
            Province::Manitoba,
            Province::NewBrunswick,
            Province::NewfoundlandAndLabrador,
            Province::NovaScotia,
            Province::NorthwestTerritories,
            Province::Nunavut,
            Province::Ontario,
            Province::PrinceEdwardIsland,
            Province::Quebec,
            Province::Saskatchewan,
            Province::Yukon,
        ]
    }

    /// Two-letter postal abbreviation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Alberta => "AB",
            Self::BritishColumbia => "BC",
            Self::Manitoba => "MB",
            Self::NewBrunswick => "NB",
            Self::NewfoundlandAndLabrador => "NL",
            Self::NovaScotia => "NS",
            Self::NorthwestTerritories => "NT",
            Self::Nunavut => "NU",
            Self::Ontario => "ON",
            Self::PrinceEdwardIsland => "PE",
            Self::Quebec => "QC",
            Self::Saskatchewan => "SK",
            Self::Yukon => "YT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alberta => "Alberta",
            Self::BritishColumbia => "British Columbia",
            Self::Manitoba => "Manitoba",
            Self::NewBrunswick => "New Brunswick",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Self::NovaScotia => "Nova Scotia",
            Self::NorthwestTerritories => "Northwest Territories",
            Self::Nunavut => "Nunavut",
            Self::Ontario => "Ontario",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::Quebec => "Quebec",
            Self::Saskatchewan => "Saskatchewan",
            Self::Yukon => "Yukon",
        }
    }

    /// Territories are listed separately from provinces in most forms.
    pub fn is_territory(&self) -> bool {
        matches!(
            self,
            Self::NorthwestTerritories | Self::Nunavut | Self::Yukon
        )
    }

    /// Parses a postal code (`"ON"`) or a full name (`"Ontario"`),
    /// ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::all().iter().copied().find(|p| {
            p.code().eq_ignore_ascii_case(needle) || p.name().eq_ignore_ascii_case(needle)
        })
    }
}

impl FromStr for Province {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInputError::UnknownProvince(s.trim().to_string()))
    }
}

impl fmt::Display for Province {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_codes_in_any_case() {
        assert_eq!(Province::parse("ON"), Some(Province::Ontario));
        assert_eq!(Province::parse("bc"), Some(Province::BritishColumbia));
        assert_eq!(Province::parse(" qc "), Some(Province::Quebec));
    }

    #[test]
    fn parse_accepts_full_names() {
        assert_eq!(
            Province::parse("prince edward island"),
            Some(Province::PrinceEdwardIsland)
        );
        assert_eq!(
            Province::parse("Newfoundland and Labrador"),
            Some(Province::NewfoundlandAndLabrador)
        );
    }

    #[test]
    fn from_str_rejects_unknown_code() {
        let result = "ZZ".parse::<Province>();

        assert_eq!(
            result,
            Err(InvalidInputError::UnknownProvince("ZZ".to_string()))
        );
    }

    #[test]
    fn every_province_round_trips_through_its_code() {
        for province in Province::all() {
            assert_eq!(Province::parse(province.code()), Some(*province));
        }
        assert_eq!(Province::all().len(), 13);
    }

    #[test]
    fn territories_are_flagged() {
        assert!(Province::Yukon.is_territory());
        assert!(!Province::Ontario.is_territory());
    }
}
