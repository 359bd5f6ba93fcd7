use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// How the income is earned; drives CPP and EI treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    Employee,
    SelfEmployed,
    Contractor,
}

impl EmploymentType {
    pub fn all() -> &'static [EmploymentType] {
        &[
            EmploymentType::Employee,
            EmploymentType::SelfEmployed,
            EmploymentType::Contractor,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::SelfEmployed => "Self-Employed",
            Self::Contractor => "Contractor",
        }
    }

    /// Self-employed people pay both halves of CPP.
    pub fn pays_both_cpp_portions(&self) -> bool {
        matches!(self, Self::SelfEmployed)
    }

    /// Self-employed people are outside EI unless they opt in.
    pub fn pays_ei(&self) -> bool {
        !matches!(self, Self::SelfEmployed)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "employee" => Some(Self::Employee),
            "selfemployed" => Some(Self::SelfEmployed),
            "contractor" => Some(Self::Contractor),
            _ => None,
        }
    }
}

impl FromStr for EmploymentType {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInputError::UnknownEmploymentType(s.trim().to_string()))
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
