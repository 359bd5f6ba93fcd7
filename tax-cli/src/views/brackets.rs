use std::fmt;

use tax_core::{BracketTable, Province, TaxTables};

use crate::utils::{format_currency, format_percent, format_upper_bound};

/// One jurisdiction's bracket schedule.
pub struct BracketsView<'a> {
    pub title: String,
    pub table: &'a BracketTable,
}

impl fmt::Display for BracketsView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for bracket in self.table.brackets() {
            write!(
                f,
                "\n  {:>14} - {:<14} {:>7}",
                format_currency(bracket.lower_bound),
                format_upper_bound(bracket.upper_bound),
                format_percent(bracket.rate)
            )?;
        }
        Ok(())
    }
}

/// Every province and territory with its top rate and sales tax.
pub struct ProvincesView<'a> {
    pub tables: &'a TaxTables,
}

impl fmt::Display for ProvincesView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Code  Name                       Top rate  GST/HST")?;
        let config = self.tables.config();
        for province in Province::all() {
            let top_rate = self
                .tables
                .provincial(*province)
                .map(|table| format_percent(table.top_rate()))
                .unwrap_or_else(|_| "-".to_string());
            write!(
                f,
                "\n{:<5} {:<26} {:>8}  {:>7}",
                province.code(),
                province.name(),
                top_rate,
                format_percent(config.sales_tax_rate(*province))
            )?;
        }
        Ok(())
    }
}
