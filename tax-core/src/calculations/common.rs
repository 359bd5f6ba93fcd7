//! Shared helpers for the tax and scenario calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, which matches how
/// amounts are rounded to the cent on Canadian returns.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2556.529)), dec!(2556.53));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides `numerator` by `denominator`, returning zero when the
/// denominator is zero.
///
/// Used for rates that are defined as zero at zero income.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::ratio_or_zero;
///
/// assert_eq!(ratio_or_zero(dec!(25000), dec!(100000)), dec!(0.25));
/// assert_eq!(ratio_or_zero(dec!(25000), dec!(0)), dec!(0));
/// ```
pub fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// `(1 + rate)^years`, by repeated multiplication so no float conversion
/// is involved.
pub fn compound_factor(
    rate: Decimal,
    years: u32,
) -> Decimal {
    let step = Decimal::ONE + rate;
    (0..years).fold(Decimal::ONE, |acc, _| acc * step)
}
