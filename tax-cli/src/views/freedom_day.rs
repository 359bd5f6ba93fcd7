use std::fmt;

use tax_core::{FreedomDay, Province, TaxResult};

use crate::utils::{format_currency, format_percent};
use crate::views::freedom_day_line;

/// Income tax summary and the resulting Tax Freedom Day.
pub struct FreedomDayView<'a> {
    pub tax_year: i32,
    pub province: Province,
    pub result: &'a TaxResult,
    pub freedom_day: FreedomDay,
}

impl fmt::Display for FreedomDayView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.result;
        writeln!(f, "Income:          {}", format_currency(r.income))?;
        writeln!(f, "Federal tax:     {}", format_currency(r.federal_tax))?;
        writeln!(
            f,
            "Provincial tax:  {} ({})",
            format_currency(r.provincial_tax),
            self.province
        )?;
        writeln!(f, "Total tax:       {}", format_currency(r.total_tax))?;
        writeln!(f, "Effective rate:  {}", format_percent(r.effective_rate))?;
        writeln!(f, "Marginal rate:   {}", format_percent(r.marginal_rate))?;
        write!(
            f,
            "Tax Freedom Day: {}",
            freedom_day_line(self.freedom_day, self.tax_year)
        )
    }
}
