//! "What if the tax stayed with you" projections.
//!
//! Every scenario starts from one year's tax and shows what that money
//! could have done instead: a down payment, an investment stream, debt
//! repayment or retirement savings.

pub mod debt;
pub mod home;
pub mod investing;
pub mod retirement;
pub mod workday;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use debt::{DebtBalances, DebtKind, DebtPayoff, DebtPriority, debt_payoff};
pub use home::{HomePurchaseScenario, HomeTier, home_purchase_scenarios};
pub use investing::{GrowthPoint, InvestmentProjection, RiskProfile, investment_growth};
pub use retirement::{RetirementProjection, lifestyle_budget, retirement_projections};
pub use workday::{WorkdaySplit, workday_split};

use crate::InvalidInputError;

/// Longest investment horizon that is projected.
pub const MAX_INVESTMENT_YEARS: u32 = 100;

/// Largest annual tax the projections accept; a century of compounding
/// at the aggressive rate stays well inside `Decimal` range.
pub const MAX_ANNUAL_TAX: Decimal = dec!(1000000000000);

/// Checks that `years` is a horizon the projections support.
pub fn validate_investment_years(years: u32) -> Result<u32, InvalidInputError> {
    if (1..=MAX_INVESTMENT_YEARS).contains(&years) {
        Ok(years)
    } else {
        Err(InvalidInputError::InvestmentYearsOutOfRange {
            years,
            max: MAX_INVESTMENT_YEARS,
        })
    }
}

/// Knobs for the projections; the defaults match a 35 year old working
/// eight-hour days and looking 30 years ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOptions {
    pub investment_years: u32,
    pub current_age: u32,
    pub working_hours: Decimal,
    pub balances: DebtBalances,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            investment_years: 30,
            current_age: 35,
            working_hours: Decimal::from(8),
            balances: DebtBalances::default(),
        }
    }
}

/// Every scenario for one annual tax amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub annual_tax: Decimal,
    pub homes: Vec<HomePurchaseScenario>,
    pub investments: Vec<InvestmentProjection>,
    pub debts: Vec<DebtPayoff>,
    pub retirement: Vec<RetirementProjection>,
    pub workday: WorkdaySplit,
}

impl ScenarioReport {
    /// Builds all scenarios.
    ///
    /// `total_rate` is the burden as a fraction of income and only feeds
    /// the working-day split.
    pub fn build(
        annual_tax: Decimal,
        total_rate: Decimal,
        options: &ScenarioOptions,
    ) -> Result<Self, InvalidInputError> {
        if annual_tax < Decimal::ZERO {
            return Err(InvalidInputError::NegativeTax(annual_tax));
        }
        if annual_tax > MAX_ANNUAL_TAX {
            return Err(InvalidInputError::AmountTooLarge(annual_tax));
        }
        validate_investment_years(options.investment_years)?;

        debug!(%annual_tax, years = options.investment_years, "building scenarios");

        Ok(Self {
            annual_tax,
            homes: home_purchase_scenarios(annual_tax),
            investments: investment_growth(annual_tax, options.investment_years),
            debts: debt_payoff(annual_tax, &options.balances),
            retirement: retirement_projections(annual_tax, options.current_age),
            workday: workday_split(total_rate, options.working_hours),
        })
    }
}
