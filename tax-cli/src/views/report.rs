use std::fmt;

use tax_core::FreedomDay;
use tax_core::calculations::TaxBurden;

use crate::utils::{format_currency, format_percent};
use crate::views::freedom_day_line;

/// Full burden report for one person.
pub struct ReportView<'a> {
    pub tax_year: i32,
    pub burden: &'a TaxBurden,
    /// Freedom day for federal plus provincial income tax; `None` without
    /// income.
    pub freedom_day: Option<FreedomDay>,
    /// Freedom day once CPP and EI are counted too.
    pub freedom_day_with_payroll: Option<FreedomDay>,
}

impl ReportView<'_> {
    fn freedom_day_text(
        &self,
        day: Option<FreedomDay>,
    ) -> String {
        day.map_or_else(|| "n/a".to_string(), |day| freedom_day_line(day, self.tax_year))
    }
}

impl fmt::Display for ReportView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = self.burden;
        let tax = &b.income_tax;

        writeln!(f, "Tax year:              {}", self.tax_year)?;
        writeln!(f, "Province:              {}", b.province)?;
        writeln!(f, "Employment type:       {}", b.employment_type)?;
        writeln!(f, "Income:                {}", format_currency(b.income))?;
        writeln!(f)?;

        writeln!(f, "Income tax")?;
        writeln!(
            f,
            "  Basic personal amount {}",
            format_currency(b.basic_personal_amount)
        )?;
        writeln!(
            f,
            "  Federal taxable       {}",
            format_currency(b.federal_taxable_income)
        )?;
        writeln!(
            f,
            "  Federal tax           {:<14} {}",
            format_currency(tax.federal_tax),
            format_percent(b.rates.federal)
        )?;
        writeln!(
            f,
            "  Provincial tax        {:<14} {}",
            format_currency(tax.provincial_tax),
            format_percent(b.rates.provincial)
        )?;
        writeln!(f)?;

        writeln!(f, "Payroll")?;
        writeln!(f, "  CPP                   {}", format_currency(b.payroll.cpp))?;
        writeln!(f, "  EI                    {}", format_currency(b.payroll.ei))?;
        writeln!(f)?;

        writeln!(
            f,
            "Total deductions:      {:<14} {}",
            format_currency(b.total_deductions),
            format_percent(b.rates.total)
        )?;
        writeln!(f, "After-tax income:      {}", format_currency(b.after_tax_income))?;
        writeln!(f, "Marginal rate:         {}", format_percent(b.rates.marginal))?;
        writeln!(
            f,
            "GST/HST on spending:   {:<14} at {}",
            format_currency(b.consumption.annual_tax),
            format_percent(b.consumption.rate)
        )?;
        writeln!(f)?;

        writeln!(f, "Take-home pay")?;
        for period in &b.pay_periods {
            writeln!(
                f,
                "  {:<10} gross {:>14}  deductions {:>14}  net {:>14}",
                period.frequency.label(),
                format_currency(period.gross),
                format_currency(period.deductions),
                format_currency(period.net)
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Tax Freedom Day:       {}",
            self.freedom_day_text(self.freedom_day)
        )?;
        write!(
            f,
            "  with CPP and EI:     {}",
            self.freedom_day_text(self.freedom_day_with_payroll)
        )
    }
}
