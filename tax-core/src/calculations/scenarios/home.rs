use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Borrowing capacity as a multiple of the down payment.
pub const MORTGAGE_MULTIPLE: Decimal = dec!(4);

/// Annual mortgage rate used for the payment estimate.
pub const MORTGAGE_RATE: Decimal = dec!(0.06);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeTier {
    StarterHome,
    FamilyHome,
}

impl HomeTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StarterHome => "Starter home",
            Self::FamilyHome => "Family home",
        }
    }

    /// Share of the borrowing capacity the tier uses.
    pub fn leverage_used(&self) -> Decimal {
        match self {
            Self::StarterHome => dec!(0.8),
            Self::FamilyHome => Decimal::ONE,
        }
    }

    /// Years of down-payment saving the tax money stands in for.
    pub fn time_saved(&self) -> &'static str {
        match self {
            Self::StarterHome => "2-3 years",
            Self::FamilyHome => "4-5 years",
        }
    }
}

/// A home the yearly tax could have been the down payment for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePurchaseScenario {
    pub tier: HomeTier,
    pub down_payment: Decimal,
    pub mortgage: Decimal,
    pub max_home_value: Decimal,
    /// Interest-only monthly payment on the mortgage.
    pub monthly_payment: Decimal,
}

/// Treats `annual_tax` as a down payment for each home tier.
pub fn home_purchase_scenarios(annual_tax: Decimal) -> Vec<HomePurchaseScenario> {
    let capacity = annual_tax * MORTGAGE_MULTIPLE;
    [HomeTier::StarterHome, HomeTier::FamilyHome]
        .into_iter()
        .map(|tier| {
            let mortgage = capacity * tier.leverage_used();
            HomePurchaseScenario {
                tier,
                down_payment: round_half_up(annual_tax),
                mortgage: round_half_up(mortgage),
                max_home_value: round_half_up(annual_tax + mortgage),
                monthly_payment: round_half_up(mortgage * MORTGAGE_RATE / dec!(12)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starter_home_uses_eighty_percent_of_capacity() {
        let scenarios = home_purchase_scenarios(dec!(20000));
        let starter = &scenarios[0];

        assert_eq!(starter.tier, HomeTier::StarterHome);
        assert_eq!(starter.mortgage, dec!(64000));
        assert_eq!(starter.max_home_value, dec!(84000));
        assert_eq!(starter.monthly_payment, dec!(320));
    }

    #[test]
    fn family_home_uses_full_capacity() {
        let scenarios = home_purchase_scenarios(dec!(20000));
        let family = &scenarios[1];

        assert_eq!(family.mortgage, dec!(80000));
        assert_eq!(family.max_home_value, dec!(100000));
        assert_eq!(family.monthly_payment, dec!(400));
    }
}
