//! Progressive bracket tax engine.
//!
//! Each jurisdiction's schedule is walked from the lowest bracket upwards.
//! Brackets entirely below the income contribute `(upper - lower) * rate`,
//! the bracket containing the income contributes `(income - lower) * rate`,
//! and the walk stops there.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{BracketTable, TaxBracket, compute_tax};
//!
//! let federal = BracketTable::new(vec![
//!     TaxBracket::new(dec!(0), Some(dec!(50197)), dec!(0.15)),
//!     TaxBracket::new(dec!(50197), None, dec!(0.205)),
//! ])
//! .unwrap();
//! let ontario = BracketTable::new(vec![
//!     TaxBracket::new(dec!(0), Some(dec!(49231)), dec!(0.0505)),
//!     TaxBracket::new(dec!(49231), None, dec!(0.0915)),
//! ])
//! .unwrap();
//!
//! let result = compute_tax(dec!(50000), &federal, &ontario).unwrap();
//!
//! assert_eq!(result.federal_tax, dec!(7500.00));
//! assert_eq!(result.provincial_tax, dec!(2556.53));
//! assert_eq!(result.total_tax, dec!(10056.53));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{ratio_or_zero, round_half_up};
use crate::{
    BracketLine, BracketTable, InvalidInputError, JurisdictionTax, Province, TaxResult, TaxTables,
};

/// Runs a single schedule over `income`.
///
/// `income` is expected to be non-negative; a negative value accrues
/// nothing.
pub fn bracket_tax(
    income: Decimal,
    table: &BracketTable,
) -> JurisdictionTax {
    if income <= Decimal::ZERO {
        return JurisdictionTax::zero();
    }

    let mut lines = Vec::new();
    let mut accrued = Decimal::ZERO;
    for bracket in table.brackets() {
        if income <= bracket.lower_bound {
            break;
        }
        let taxable_amount = bracket.taxable_amount(income);
        let tax = taxable_amount * bracket.rate;
        accrued += tax;
        lines.push(BracketLine {
            lower_bound: bracket.lower_bound,
            upper_bound: bracket.upper_bound,
            rate: bracket.rate,
            taxable_amount,
            tax,
        });
    }

    JurisdictionTax {
        tax: round_half_up(accrued),
        marginal_rate: table.marginal_rate(income),
        lines,
    }
}

/// Computes federal and provincial tax on `income`.
///
/// # Errors
///
/// Returns [`InvalidInputError::NegativeIncome`] when `income` is below zero.
pub fn compute_tax(
    income: Decimal,
    federal_table: &BracketTable,
    provincial_table: &BracketTable,
) -> Result<TaxResult, InvalidInputError> {
    if income < Decimal::ZERO {
        warn!(%income, "rejected negative income");
        return Err(InvalidInputError::NegativeIncome(income));
    }
    if income.is_zero() {
        return Ok(TaxResult::zero());
    }

    let mut federal = bracket_tax(income, federal_table);
    let mut provincial = bracket_tax(income, provincial_table);
    trim_to_income(income, &mut provincial, &mut federal);
    let total_tax = federal.tax + provincial.tax;

    let result = TaxResult {
        income,
        federal_tax: federal.tax,
        provincial_tax: provincial.tax,
        total_tax,
        effective_rate: ratio_or_zero(total_tax, income),
        marginal_rate: federal.marginal_rate + provincial.marginal_rate,
        federal,
        provincial,
    };

    debug!(
        %income,
        federal_tax = %result.federal_tax,
        provincial_tax = %result.provincial_tax,
        total_tax = %result.total_tax,
        "computed income tax"
    );

    Ok(result)
}

/// Rounding each jurisdiction to the cent can leave the pair a cent or so
/// above a tiny income. Takes the excess off `first`, then `second`.
pub(crate) fn trim_to_income(
    income: Decimal,
    first: &mut JurisdictionTax,
    second: &mut JurisdictionTax,
) {
    let mut excess = first.tax + second.tax - income;
    for part in [first, second] {
        if excess <= Decimal::ZERO {
            break;
        }
        let cut = excess.min(part.tax);
        part.tax -= cut;
        excess -= cut;
    }
}

/// Resolves the schedules for `province` from `tables` and computes tax.
pub fn compute_tax_for_province(
    income: Decimal,
    province: Province,
    tables: &TaxTables,
) -> Result<TaxResult, InvalidInputError> {
    let provincial = tables.provincial(province)?;
    compute_tax(income, tables.federal(), provincial)
}
