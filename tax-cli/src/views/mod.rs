//! Plain-text and CSV renderings of the calculation results.

mod breakdown;
mod brackets;
mod freedom_day;
mod report;
mod scenarios;

pub use breakdown::{BreakdownRow, breakdown_rows, write_breakdown_csv};
pub use brackets::{BracketsView, ProvincesView};
pub use freedom_day::FreedomDayView;
pub use report::ReportView;
pub use scenarios::ScenariosView;

use tax_core::FreedomDay;

/// "day 92 (April 1, 2024)", or just "day 92" when the day does not exist
/// in `year`.
pub(crate) fn freedom_day_line(
    day: FreedomDay,
    year: i32,
) -> String {
    match day.date(year) {
        Some(date) => format!("{day} ({})", date.format("%B %-d, %Y")),
        None => day.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn freedom_day_line_includes_date() {
        assert_eq!(freedom_day_line(FreedomDay(92), 2024), "day 92 (April 1, 2024)");
        assert_eq!(freedom_day_line(FreedomDay(92), 2023), "day 92 (April 2, 2023)");
    }

    #[test]
    fn freedom_day_line_without_date() {
        assert_eq!(freedom_day_line(FreedomDay(366), 2023), "day 366");
    }
}
