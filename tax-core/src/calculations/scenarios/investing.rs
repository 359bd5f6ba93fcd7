use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{compound_factor, round_half_up};

/// Assumed long-run annual return for a style of portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub fn all() -> &'static [RiskProfile] {
        &[
            RiskProfile::Conservative,
            RiskProfile::Balanced,
            RiskProfile::Aggressive,
        ]
    }

    pub fn annual_rate(&self) -> Decimal {
        match self {
            Self::Conservative => dec!(0.06),
            Self::Balanced => dec!(0.08),
            Self::Aggressive => dec!(0.10),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Aggressive => "Aggressive",
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Conservative => "Low-risk index funds and bonds",
            Self::Balanced => "Diversified portfolio",
            Self::Aggressive => "Growth-focused stocks",
        }
    }
}

/// Portfolio value at the end of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub value: Decimal,
    pub contributions: Decimal,
    pub earnings: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub profile: RiskProfile,
    pub annual_rate: Decimal,
    pub points: Vec<GrowthPoint>,
}

impl InvestmentProjection {
    /// Value after the last projected year, or zero for an empty projection.
    pub fn final_value(&self) -> Decimal {
        self.points.last().map_or(Decimal::ZERO, |p| p.value)
    }
}

/// Year-by-year value of investing `annual_amount` up front and again
/// every year at `rate`.
///
/// The value after `y` years is `A(1+r)^y + A((1+r)^y - 1) / r`.
pub fn project_growth(
    annual_amount: Decimal,
    rate: Decimal,
    years: u32,
) -> Vec<GrowthPoint> {
    (1..=years)
        .map(|year| {
            let factor = compound_factor(rate, year);
            let principal = annual_amount * factor;
            let contribution_growth = if rate.is_zero() {
                annual_amount * Decimal::from(year)
            } else {
                annual_amount * (factor - Decimal::ONE) / rate
            };
            let value = round_half_up(principal + contribution_growth);
            let contributions = round_half_up(annual_amount * Decimal::from(year));
            GrowthPoint {
                year,
                value,
                contributions,
                earnings: value - contributions,
            }
        })
        .collect()
}

/// Projections for each [`RiskProfile`].
pub fn investment_growth(
    annual_amount: Decimal,
    years: u32,
) -> Vec<InvestmentProjection> {
    RiskProfile::all()
        .iter()
        .map(|profile| InvestmentProjection {
            profile: *profile,
            annual_rate: profile.annual_rate(),
            points: project_growth(annual_amount, profile.annual_rate(), years),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_year_grows_principal_and_contribution() {
        let points = project_growth(dec!(10000), dec!(0.10), 1);

        // 10000 * 1.1 + 10000 * 0.1 / 0.1
        assert_eq!(points[0].value, dec!(21000.00));
        assert_eq!(points[0].contributions, dec!(10000.00));
        assert_eq!(points[0].earnings, dec!(11000.00));
    }

    #[test]
    fn second_year_compounds() {
        let points = project_growth(dec!(10000), dec!(0.10), 2);

        // 10000 * 1.21 + 10000 * 0.21 / 0.1 = 12100 + 21000
        assert_eq!(points[1].value, dec!(33100.00));
        assert_eq!(points[1].contributions, dec!(20000.00));
    }

    #[test]
    fn zero_rate_just_accumulates() {
        let points = project_growth(dec!(5000), dec!(0), 3);

        assert_eq!(points[2].value, dec!(20000.00));
    }

    #[test]
    fn profiles_are_ordered_by_final_value() {
        let projections = investment_growth(dec!(12000), 30);

        assert_eq!(projections.len(), 3);
        assert_eq!(projections[0].points.len(), 30);
        assert!(projections[0].final_value() < projections[1].final_value());
        assert!(projections[1].final_value() < projections[2].final_value());
    }

    #[test]
    fn zero_years_is_empty() {
        let projections = investment_growth(dec!(12000), 0);

        assert_eq!(projections[0].final_value(), Decimal::ZERO);
    }
}
