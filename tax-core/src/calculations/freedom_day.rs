//! Tax Freedom Day derivation.
//!
//! Income is assumed to be earned evenly across the year, so the day on
//! which cumulative earnings reach the year's tax is
//! `ceil(total_tax * days_in_year / income)`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::compute_freedom_day;
//!
//! let day = compute_freedom_day(dec!(100000), dec!(25000), 365).unwrap();
//!
//! assert_eq!(day.day_of_year(), 92);
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::{FreedomDay, InvalidInputError};

/// Number of days in `year` (366 in leap years).
pub fn days_in_year(year: i32) -> u16 {
    match NaiveDate::from_ymd_opt(year, 12, 31) {
        Some(last_day) if last_day.ordinal() == 366 => 366,
        _ => 365,
    }
}

/// Derives the day of the year on which `total_tax` has been earned.
///
/// A year with no tax is free from day 1.
///
/// # Errors
///
/// Returns [`InvalidInputError`] when:
/// - `income` is zero or negative
/// - `total_tax` is negative or larger than `income`
/// - `days_in_year` is not 365 or 366
pub fn compute_freedom_day(
    income: Decimal,
    total_tax: Decimal,
    days_in_year: u16,
) -> Result<FreedomDay, InvalidInputError> {
    if income <= Decimal::ZERO {
        warn!(%income, "freedom day needs a positive income");
        return Err(InvalidInputError::NonPositiveIncome(income));
    }
    if total_tax < Decimal::ZERO {
        return Err(InvalidInputError::NegativeTax(total_tax));
    }
    if total_tax > income {
        warn!(%income, %total_tax, "tax exceeds income");
        return Err(InvalidInputError::TaxExceedsIncome {
            tax: total_tax,
            income,
        });
    }
    if days_in_year != 365 && days_in_year != 366 {
        return Err(InvalidInputError::InvalidDaysInYear(days_in_year));
    }

    // Multiply before dividing so whole-day results stay exact. Amounts
    // near Decimal::MAX overflow that product and divide first instead.
    let days = Decimal::from(days_in_year);
    let fractional_day = match total_tax.checked_mul(days) {
        Some(tax_days) => tax_days / income,
        None => total_tax / income * days,
    };
    let day = fractional_day
        .ceil()
        .to_u16()
        .unwrap_or(days_in_year)
        .clamp(1, days_in_year);

    debug!(%income, %total_tax, days_in_year, day, "derived tax freedom day");

    Ok(FreedomDay(day))
}

impl FreedomDay {
    /// Derives the freedom day for a specific calendar year.
    pub fn for_year(
        income: Decimal,
        total_tax: Decimal,
        year: i32,
    ) -> Result<Self, InvalidInputError> {
        compute_freedom_day(income, total_tax, days_in_year(year))
    }
}
