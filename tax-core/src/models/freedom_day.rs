use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day of the year (1-based) on which cumulative earnings cover the
/// year's tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FreedomDay(pub u16);

impl FreedomDay {
    pub fn day_of_year(&self) -> u16 {
        self.0
    }

    /// Calendar date of this day in `year`.
    ///
    /// Returns `None` when the day does not exist in that year (day 366 of
    /// a common year).
    pub fn date(
        &self,
        year: i32,
    ) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(year, u32::from(self.0))
    }
}

impl fmt::Display for FreedomDay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
