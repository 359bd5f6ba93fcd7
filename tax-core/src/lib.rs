//! Canadian income tax engine and Tax Freedom Day calculations.
//!
//! The crate is pure: every calculation takes its [`TaxTables`] by
//! reference and returns an owned result, so it can be called from any
//! number of threads without coordination.

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{compute_freedom_day, compute_tax, compute_tax_for_province};
pub use error::InvalidInputError;
pub use models::*;
