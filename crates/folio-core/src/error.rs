use thiserror::Error;

/// Classification of an [`EngineError`] into the four failure families
/// surfaced to adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    MissingData,
    Range,
    InvalidTiming,
}

/// Validation and data errors exposed by `folio-core`.
///
/// Every variant is raised before any computation happens; the engines
/// either return a complete result or fail here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("allocations must contain at least one position")]
    EmptyAllocations,
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("allocation amount for '{ticker}' must be positive, got {amount}")]
    NonPositiveAmount { ticker: String, amount: f64 },
    #[error("duplicate ticker '{ticker}' with conflicting amounts {first} and {second}")]
    ConflictingAllocation {
        ticker: String,
        first: f64,
        second: f64,
    },
    #[error("annual return rate {rate}% is below total loss (-100%)")]
    RateBelowTotalLoss { rate: f64 },

    #[error("no price column for ticker '{ticker}'")]
    MissingPriceColumn { ticker: String },
    #[error("first price for '{ticker}' must be strictly positive, got {price}")]
    UnusableFirstPrice { ticker: String, price: f64 },
    #[error("price column for '{ticker}' has {actual} rows, date index has {expected}")]
    MisalignedColumn {
        ticker: String,
        expected: usize,
        actual: usize,
    },
    #[error("price for '{ticker}' at row {row} must be a finite non-negative number")]
    InvalidPrice { ticker: String, row: usize },
    #[error("price table dates must be strictly increasing")]
    UnorderedDates,

    #[error("price table has no rows for the requested range")]
    EmptyDateRange,

    #[error("invalid contribution timing '{value}', expected one of monthly, yearly")]
    InvalidTiming { value: String },
}

impl EngineError {
    /// Failure family the variant belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyAllocations
            | Self::EmptyTicker
            | Self::TickerTooLong { .. }
            | Self::TickerInvalidStart { .. }
            | Self::TickerInvalidChar { .. }
            | Self::InvalidDate { .. }
            | Self::NonFiniteValue { .. }
            | Self::NegativeValue { .. }
            | Self::NonPositiveAmount { .. }
            | Self::ConflictingAllocation { .. }
            | Self::RateBelowTotalLoss { .. }
            | Self::MisalignedColumn { .. }
            | Self::InvalidPrice { .. }
            | Self::UnorderedDates => ErrorKind::InvalidInput,

            Self::MissingPriceColumn { .. } | Self::UnusableFirstPrice { .. } => {
                ErrorKind::MissingData
            }

            Self::EmptyDateRange => ErrorKind::Range,

            Self::InvalidTiming { .. } => ErrorKind::InvalidTiming,
        }
    }

    /// Stable machine-readable code for envelope and log output.
    pub const fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => "engine.invalid_input",
            ErrorKind::MissingData => "engine.missing_data",
            ErrorKind::Range => "engine.range",
            ErrorKind::InvalidTiming => "engine.invalid_timing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_variants_into_kinds() {
        assert_eq!(EngineError::EmptyAllocations.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            EngineError::MissingPriceColumn {
                ticker: String::from("AAPL"),
            }
            .kind(),
            ErrorKind::MissingData
        );
        assert_eq!(EngineError::EmptyDateRange.kind(), ErrorKind::Range);
        assert_eq!(
            EngineError::InvalidTiming {
                value: String::from("weekly"),
            }
            .kind(),
            ErrorKind::InvalidTiming
        );
    }

    #[test]
    fn codes_follow_kind() {
        assert_eq!(EngineError::EmptyDateRange.code(), "engine.range");
        assert_eq!(
            EngineError::UnusableFirstPrice {
                ticker: String::from("MSFT"),
                price: 0.0,
            }
            .code(),
            "engine.missing_data"
        );
    }
}
