//! Split error types.
//!
//! Every failure is value-level: a split either produces its complete delta
//! list or one of these errors, never a partial result.

use divvy_shared::AppError;
use divvy_shared::types::{MAX_AMOUNT, UserId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while splitting an expense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The split type tag is not one of EQUAL, PERCENTAGE, EXACT, SHARES.
    #[error("Invalid split type: {0}")]
    InvalidSplitType(String),

    /// No participants were given.
    #[error("Split list must contain at least one participant")]
    EmptySplitList,

    /// Expense amount must be strictly positive.
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Expense amount or exact share above [`MAX_AMOUNT`].
    #[error("Amount {0} exceeds the maximum of {MAX_AMOUNT}")]
    AmountOverflow(Decimal),

    /// Percentage outside `0..=100`.
    #[error("Percentage {percentage} for user {user_id} is outside 0..=100")]
    InvalidPercentage {
        /// The participant carrying the bad percentage.
        user_id: UserId,
        /// The rejected percentage.
        percentage: Decimal,
    },
}

impl SplitError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSplitType(_) => "INVALID_SPLIT_TYPE",
            Self::EmptySplitList => "EMPTY_SPLIT_LIST",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::AmountOverflow(_) => "AMOUNT_OVERFLOW",
            Self::InvalidPercentage { .. } => "INVALID_PERCENTAGE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - caller input
            Self::InvalidSplitType(_)
            | Self::EmptySplitList
            | Self::NonPositiveAmount(_)
            | Self::AmountOverflow(_)
            | Self::InvalidPercentage { .. } => 400,
        }
    }
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        Self::Validation(err.to_string())
    }
}
