use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures for a single calculation request.
///
/// These are deterministic: the same input always fails the same way, so
/// callers should surface the message rather than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Income below zero was supplied to a calculation that accepts zero.
    #[error("income must not be negative, got {0}")]
    NegativeIncome(Decimal),

    /// Income of zero or less was supplied where a positive value is needed.
    #[error("income must be greater than zero, got {0}")]
    NonPositiveIncome(Decimal),

    /// A tax amount below zero was supplied.
    #[error("tax must not be negative, got {0}")]
    NegativeTax(Decimal),

    /// The total tax is larger than the gross income it was levied on.
    #[error("tax {tax} exceeds gross income {income}")]
    TaxExceedsIncome { tax: Decimal, income: Decimal },

    /// Province or territory code that is not one of the enumerated ones.
    #[error("unrecognized province or territory '{0}'")]
    UnknownProvince(String),

    /// No bracket table is loaded for the requested province.
    #[error("no bracket table loaded for {0}")]
    MissingProvincialTable(String),

    /// Days in the year must be 365 or 366.
    #[error("days in year must be 365 or 366, got {0}")]
    InvalidDaysInYear(u16),

    /// Investment horizon outside the supported range of years.
    #[error("investment years must be between 1 and {max}, got {years}")]
    InvestmentYearsOutOfRange { years: u32, max: u32 },

    /// Amount too large to project without overflowing.
    #[error("annual tax {0} is too large to project")]
    AmountTooLarge(Decimal),

    /// Employment type that is not recognized.
    #[error("unrecognized employment type '{0}'")]
    UnknownEmploymentType(String),
}
