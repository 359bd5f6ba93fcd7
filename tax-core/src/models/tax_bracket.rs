use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contiguous income range taxed at a single marginal rate.
///
/// `upper_bound` of `None` means the bracket is unbounded above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Portion of `income` that falls inside this bracket.
    pub fn taxable_amount(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.lower_bound {
            return Decimal::ZERO;
        }
        match self.upper_bound {
            Some(upper) if income > upper => upper - self.lower_bound,
            _ => income - self.lower_bound,
        }
    }
}

/// Errors raised when a bracket schedule breaks the table invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table has no brackets")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    FirstLowerBoundNotZero(Decimal),

    #[error("bracket {index} starts at {found}, expected {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} has an empty or inverted range")]
    EmptyRange { index: usize },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeLast(usize),

    #[error("last bracket must be unbounded")]
    LastBracketBounded,

    #[error("bracket {index} rate {rate} is outside 0..=1")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// Ordered bracket schedule for one jurisdiction.
///
/// Brackets are contiguous, non-overlapping and cover `[0, ∞)`. The
/// invariants are checked by [`BracketTable::new`], so every value of this
/// type is safe to walk without further checks.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::{BracketTable, TaxBracket};
///
/// let table = BracketTable::new(vec![
///     TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.10)),
///     TaxBracket::new(dec!(50000), None, dec!(0.20)),
/// ])
/// .unwrap();
///
/// assert_eq!(table.marginal_rate(dec!(75000)), dec!(0.20));
/// assert_eq!(table.top_rate(), dec!(0.20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table after checking ordering, contiguity, coverage and rates.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        let first = brackets.first().ok_or(BracketTableError::Empty)?;
        if first.lower_bound != Decimal::ZERO {
            return Err(BracketTableError::FirstLowerBoundNotZero(first.lower_bound));
        }

        let last_index = brackets.len() - 1;
        let mut expected_lower = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.lower_bound != expected_lower {
                return Err(BracketTableError::NotContiguous {
                    index,
                    expected: expected_lower,
                    found: bracket.lower_bound,
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }
            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(BracketTableError::EmptyRange { index });
                }
                Some(upper) => {
                    if index == last_index {
                        return Err(BracketTableError::LastBracketBounded);
                    }
                    expected_lower = upper;
                }
                None if index != last_index => {
                    return Err(BracketTableError::UnboundedBeforeLast(index));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The bracket that taxes the next dollar earned above `income`.
    ///
    /// At an exact threshold this is the upper bracket.
    pub fn marginal_bracket(
        &self,
        income: Decimal,
    ) -> &TaxBracket {
        self.brackets
            .iter()
            .rev()
            .find(|b| b.lower_bound <= income)
            .unwrap_or(&self.brackets[0])
    }

    pub fn marginal_rate(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.marginal_bracket(income).rate
    }

    /// Rate of the unbounded top bracket.
    pub fn top_rate(&self) -> Decimal {
        self.brackets[self.brackets.len() - 1].rate
    }

    /// Highest rate anywhere in the schedule.
    ///
    /// Usually the top rate, but a schedule may tax a lower band more
    /// heavily.
    pub fn max_rate(&self) -> Decimal {
        self.brackets
            .iter()
            .map(|b| b.rate)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketTable {
    type Error = BracketTableError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<TaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}
