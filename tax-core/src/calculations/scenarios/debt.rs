use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtKind {
    CreditCard,
    StudentLoan,
    CarLoan,
    Mortgage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DebtPriority {
    High,
    Medium,
    Low,
}

impl DebtKind {
    pub fn all() -> &'static [DebtKind] {
        &[
            DebtKind::CreditCard,
            DebtKind::StudentLoan,
            DebtKind::CarLoan,
            DebtKind::Mortgage,
        ]
    }

    /// Typical annual interest rate.
    pub fn annual_rate(&self) -> Decimal {
        match self {
            Self::CreditCard => dec!(0.1999),
            Self::StudentLoan => dec!(0.0599),
            Self::CarLoan => dec!(0.0699),
            Self::Mortgage => dec!(0.0559),
        }
    }

    pub fn priority(&self) -> DebtPriority {
        match self {
            Self::CreditCard => DebtPriority::High,
            Self::StudentLoan | Self::CarLoan => DebtPriority::Medium,
            Self::Mortgage => DebtPriority::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit card",
            Self::StudentLoan => "Student loan",
            Self::CarLoan => "Car loan",
            Self::Mortgage => "Mortgage",
        }
    }
}

/// Outstanding balances, all optional (zero when unknown).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtBalances {
    pub credit_card: Decimal,
    pub student_loan: Decimal,
    pub car_loan: Decimal,
    pub mortgage: Decimal,
}

impl DebtBalances {
    pub fn balance(
        &self,
        kind: DebtKind,
    ) -> Decimal {
        match kind {
            DebtKind::CreditCard => self.credit_card,
            DebtKind::StudentLoan => self.student_loan,
            DebtKind::CarLoan => self.car_loan,
            DebtKind::Mortgage => self.mortgage,
        }
    }
}

/// Interest avoided by putting a year's tax against one kind of debt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub kind: DebtKind,
    pub annual_rate: Decimal,
    pub priority: DebtPriority,
    pub monthly_interest_saved: Decimal,
    pub five_year_savings: Decimal,
    /// The balance supplied for this debt, if any.
    pub balance: Option<Decimal>,
    /// Fraction of `balance` one year's tax would clear, capped at 1.
    pub share_cleared: Option<Decimal>,
}

/// Interest savings for each debt kind, highest priority first.
pub fn debt_payoff(
    annual_tax: Decimal,
    balances: &DebtBalances,
) -> Vec<DebtPayoff> {
    DebtKind::all()
        .iter()
        .map(|kind| {
            let monthly = annual_tax * kind.annual_rate() / dec!(12);
            let balance = Some(balances.balance(*kind)).filter(|b| *b > Decimal::ZERO);
            DebtPayoff {
                kind: *kind,
                annual_rate: kind.annual_rate(),
                priority: kind.priority(),
                monthly_interest_saved: round_half_up(monthly),
                five_year_savings: round_half_up(monthly * dec!(60)),
                balance,
                share_cleared: balance.map(|b| (annual_tax / b).min(Decimal::ONE)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn credit_card_savings() {
        let payoffs = debt_payoff(dec!(12000), &DebtBalances::default());
        let card = &payoffs[0];

        // 12000 * 0.1999 / 12 = 199.90
        assert_eq!(card.kind, DebtKind::CreditCard);
        assert_eq!(card.monthly_interest_saved, dec!(199.90));
        assert_eq!(card.five_year_savings, dec!(11994.00));
        assert_eq!(card.priority, DebtPriority::High);
        assert_eq!(card.balance, None);
    }

    #[test]
    fn share_cleared_is_capped() {
        let balances = DebtBalances {
            credit_card: dec!(5000),
            mortgage: dec!(400000),
            ..Default::default()
        };

        let payoffs = debt_payoff(dec!(20000), &balances);

        assert_eq!(payoffs[0].share_cleared, Some(Decimal::ONE));
        assert_eq!(payoffs[3].share_cleared, Some(dec!(0.05)));
        assert_eq!(payoffs[1].share_cleared, None);
    }
}
