use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a working day divides between tax and take-home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdaySplit {
    pub working_hours: Decimal,
    pub hours_for_tax: Decimal,
    pub hours_for_you: Decimal,
}

/// Splits `working_hours` by the total burden rate (a fraction of income).
pub fn workday_split(
    total_rate: Decimal,
    working_hours: Decimal,
) -> WorkdaySplit {
    let rate = total_rate.clamp(Decimal::ZERO, Decimal::ONE);
    let hours_for_tax = (working_hours * rate).round_dp(2);
    WorkdaySplit {
        working_hours,
        hours_for_tax,
        hours_for_you: working_hours - hours_for_tax,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn eight_hour_day_at_thirty_percent() {
        let split = workday_split(dec!(0.30), dec!(8));

        assert_eq!(split.hours_for_tax, dec!(2.4));
        assert_eq!(split.hours_for_you, dec!(5.6));
    }

    #[test]
    fn rate_is_clamped_to_whole_day() {
        let split = workday_split(dec!(1.5), dec!(8));

        assert_eq!(split.hours_for_tax, dec!(8));
        assert_eq!(split.hours_for_you, dec!(0));
    }
}
