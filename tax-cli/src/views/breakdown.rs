use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::calculations::common::round_half_up;
use tax_core::{JurisdictionTax, TaxResult};

/// One row of the per-bracket CSV export; `tax` is rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub jurisdiction: &'static str,
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}

fn rows_for<'a>(
    jurisdiction: &'static str,
    tax: &'a JurisdictionTax,
) -> impl Iterator<Item = BreakdownRow> + 'a {
    tax.lines.iter().map(move |line| BreakdownRow {
        jurisdiction,
        lower_bound: line.lower_bound,
        upper_bound: line.upper_bound,
        rate: line.rate,
        taxable_amount: line.taxable_amount,
        tax: round_half_up(line.tax),
    })
}

/// Federal rows followed by provincial rows, one per bracket that taxed
/// some income.
pub fn breakdown_rows(result: &TaxResult) -> Vec<BreakdownRow> {
    rows_for("federal", &result.federal)
        .chain(rows_for("provincial", &result.provincial))
        .collect()
}

/// Writes [`breakdown_rows`] as CSV with a header row.
pub fn write_breakdown_csv<W: Write>(
    result: &TaxResult,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in breakdown_rows(result) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
