use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::investing::RiskProfile;
use crate::calculations::common::{compound_factor, round_half_up};

/// Retirement ages that are projected.
pub const RETIREMENT_AGES: [u32; 3] = [55, 60, 65];

/// Months of retirement a lump sum is spread over (20 years).
pub const RETIREMENT_MONTHS: u32 = 240;

/// What one year's tax, invested once, grows to by a retirement age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub retirement_age: u32,
    pub years_to_retirement: u32,
    pub conservative_value: Decimal,
    pub balanced_value: Decimal,
    pub aggressive_value: Decimal,
    /// Monthly income from spreading the tax itself over the retirement.
    pub monthly_income_potential: Decimal,
}

/// Projections for every retirement age later than `current_age`.
pub fn retirement_projections(
    annual_tax: Decimal,
    current_age: u32,
) -> Vec<RetirementProjection> {
    let monthly_income_potential = round_half_up(annual_tax / Decimal::from(RETIREMENT_MONTHS));
    let grow = |profile: RiskProfile, years: u32| {
        round_half_up(annual_tax * compound_factor(profile.annual_rate(), years))
    };

    RETIREMENT_AGES
        .iter()
        .filter(|age| **age > current_age)
        .map(|age| {
            let years = age - current_age;
            RetirementProjection {
                retirement_age: *age,
                years_to_retirement: years,
                conservative_value: grow(RiskProfile::Conservative, years),
                balanced_value: grow(RiskProfile::Balanced, years),
                aggressive_value: grow(RiskProfile::Aggressive, years),
                monthly_income_potential,
            }
        })
        .collect()
}

/// Illustrative monthly budget lines for a retirement income.
pub fn lifestyle_budget(monthly_income: Decimal) -> Vec<(&'static str, Decimal)> {
    vec![
        ("Annual vacation budget", round_half_up(monthly_income * dec!(2))),
        ("Monthly housing budget", round_half_up(monthly_income * dec!(0.4))),
        ("Healthcare savings", round_half_up(monthly_income * dec!(0.15))),
        ("Entertainment & dining", round_half_up(monthly_income * dec!(0.2))),
    ]
}
