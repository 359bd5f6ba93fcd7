//! Tax calculations.
//!
//! - [`engine`]: progressive bracket walk for federal and provincial tax.
//! - [`freedom_day`]: Tax Freedom Day from income and tax.
//! - [`burden`]: full burden including payroll deductions and GST/HST.
//! - [`scenarios`]: alternative uses of a year's tax.

pub mod burden;
pub mod common;
pub mod engine;
pub mod freedom_day;
pub mod scenarios;

pub use burden::{
    BurdenRates, ConsumptionTax, PayFrequency, PayPeriod, PayrollContributions, SpendingCategory,
    TaxBurden, TaxBurdenCalculator, TaxBurdenInput,
};
pub use engine::{bracket_tax, compute_tax, compute_tax_for_province};
pub use freedom_day::{compute_freedom_day, days_in_year};
pub use scenarios::{ScenarioOptions, ScenarioReport};
