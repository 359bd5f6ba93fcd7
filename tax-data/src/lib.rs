//! Bracket schedules and year constants for the tax engine.
//!
//! The published tables ship inside the binary ([`builtin_tables`]); a
//! user-supplied CSV can replace the bracket schedules for a year while
//! keeping the built-in payroll and sales-tax constants
//! ([`tables_from_reader`]).

mod builtin;
mod loader;

pub use builtin::{builtin_tables, supported_years, tables_from_reader};
pub use loader::{Jurisdiction, TaxBracketRecord, TaxTableLoader, TaxTableLoaderError};
