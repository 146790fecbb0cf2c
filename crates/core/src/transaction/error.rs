//! Transaction error types.

use thiserror::Error;

use super::types::TransactionKind;

/// Transaction validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// Amount must be a positive whole number of rupiah.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Notes exceed the maximum length.
    #[error("Notes must be under 200 characters")]
    NotesTooLong,

    /// Category does not match the transaction kind.
    #[error("Category does not match {kind} transaction")]
    CategoryMismatch {
        /// The transaction kind that was being recorded.
        kind: TransactionKind,
    },
}
