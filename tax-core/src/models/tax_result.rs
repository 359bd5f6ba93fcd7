use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax accrued in one bracket of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    /// Income that fell inside the bracket.
    pub taxable_amount: Decimal,
    /// `taxable_amount * rate`, unrounded.
    pub tax: Decimal,
}

/// Tax owed to a single jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionTax {
    /// Sum of the bracket lines, rounded half-up to cents.
    pub tax: Decimal,
    /// Rate applied to the next dollar of income; zero when income is zero.
    pub marginal_rate: Decimal,
    /// One line per bracket that received income, lowest first.
    pub lines: Vec<BracketLine>,
}

impl JurisdictionTax {
    pub fn zero() -> Self {
        Self {
            tax: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
            lines: Vec::new(),
        }
    }
}

/// Result of running the federal and provincial schedules over one income.
///
/// Rates are fractions (`0.2011` rather than `20.11`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub income: Decimal,
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
    /// Combined federal and provincial rate on the next dollar.
    pub marginal_rate: Decimal,
    pub federal: JurisdictionTax,
    pub provincial: JurisdictionTax,
}

impl TaxResult {
    pub fn zero() -> Self {
        Self {
            income: Decimal::ZERO,
            federal_tax: Decimal::ZERO,
            provincial_tax: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            effective_rate: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
            federal: JurisdictionTax::zero(),
            provincial: JurisdictionTax::zero(),
        }
    }

    pub fn after_tax_income(&self) -> Decimal {
        self.income - self.total_tax
    }
}
