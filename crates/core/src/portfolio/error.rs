//! Investment error types.

use thiserror::Error;

/// Investment validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvestmentError {
    /// Investment name must be 1-255 characters.
    #[error("Investment name must be 1-255 characters")]
    NameLength,

    /// Contribution and value must be positive.
    #[error("Contribution and value must be positive")]
    NonPositiveAmount,
}
