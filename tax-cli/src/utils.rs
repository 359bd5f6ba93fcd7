use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes `$`
/// and commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace([',', '$'], "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator and a leading `$` (e.g.
/// `"$85,000"`). Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an amount as dollars with thousands separators, e.g. `$12,345.68`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Formats a fraction as a percentage with two decimals, e.g. `0.2011` as `20.11%`.
pub fn format_percent(rate: Decimal) -> String {
    let percent =
        (rate * Decimal::ONE_HUNDRED).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.2}%")
}

/// Formats an optional bracket bound, using "and up" when unbounded.
pub fn format_upper_bound(bound: Option<Decimal>) -> String {
    bound
        .map(format_currency)
        .unwrap_or_else(|| "and up".to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_accepts_dollar_sign() {
        assert_eq!(parse_decimal("$85,000").unwrap(), dec!(85000));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.5)), "$999.50");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(10056.525)), "$10,056.53");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn format_currency_negative() {
        assert_eq!(format_currency(dec!(-1500)), "-$1,500.00");
    }

    #[test]
    fn format_percent_two_decimals() {
        assert_eq!(format_percent(dec!(0.20113)), "20.11%");
        assert_eq!(format_percent(dec!(0.15)), "15.00%");
        assert_eq!(format_percent(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn format_upper_bound_unbounded() {
        assert_eq!(format_upper_bound(None), "and up");
        assert_eq!(format_upper_bound(Some(dec!(53359))), "$53,359.00");
    }
}
