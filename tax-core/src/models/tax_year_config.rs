use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Province;

/// Federal basic personal amount and its high-income phase-out.
///
/// The full `maximum` applies up to `phase_out_start`; between
/// `phase_out_start` and `phase_out_end` it shrinks linearly towards
/// `minimum`, which applies from `phase_out_end` upwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicPersonalAmount {
    pub maximum: Decimal,
    pub minimum: Decimal,
    pub phase_out_start: Decimal,
    pub phase_out_end: Decimal,
}

impl BasicPersonalAmount {
    /// Basic personal amount available at `income`.
    pub fn amount_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.phase_out_start {
            return self.maximum;
        }
        let span = self.phase_out_end - self.phase_out_start;
        if span <= Decimal::ZERO {
            return self.minimum;
        }
        let reduction_factor = (income - self.phase_out_start) / span;
        let reduced = self.maximum - (self.maximum - self.minimum) * reduction_factor;
        reduced.max(self.minimum)
    }
}

/// Per-year constants that sit alongside the bracket schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    pub basic_personal_amount: BasicPersonalAmount,
    /// Employee CPP contribution rate.
    pub cpp_rate: Decimal,
    /// Maximum annual employee CPP contribution.
    pub cpp_max: Decimal,
    /// Employee EI premium rate.
    pub ei_rate: Decimal,
    /// Maximum annual employee EI premium.
    pub ei_max: Decimal,
    /// Federal GST, used where a province has no entry in `sales_tax_rates`.
    pub gst_rate: Decimal,
    /// Combined GST/HST rate charged on purchases, per province.
    pub sales_tax_rates: BTreeMap<Province, Decimal>,
}

impl TaxYearConfig {
    pub fn sales_tax_rate(
        &self,
        province: Province,
    ) -> Decimal {
        self.sales_tax_rates
            .get(&province)
            .copied()
            .unwrap_or(self.gst_rate)
    }
}
