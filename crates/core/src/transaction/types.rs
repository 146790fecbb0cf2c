//! Transaction data types.

use arta_shared::types::{Money, TransactionId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::TransactionError;

/// Maximum transaction notes length.
pub const MAX_NOTES_LEN: usize = 200;

/// Whether a transaction moves money out or in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent.
    Expense,
    /// Money received.
    Income,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// Transaction category.
///
/// Expense rows use one of the five spending categories; income rows carry
/// the dedicated `Income` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food and drink.
    Makan,
    /// Transport.
    Transportasi,
    /// Cigarettes.
    Rokok,
    /// Shopping.
    Belanja,
    /// Everything else.
    Lainnya,
    /// Income rows only.
    Income,
}

impl Category {
    /// The five expense categories, in display order.
    pub const EXPENSE: [Self; 5] = [
        Self::Makan,
        Self::Transportasi,
        Self::Rokok,
        Self::Belanja,
        Self::Lainnya,
    ];

    /// Returns true for a spending category (everything except `Income`).
    #[must_use]
    pub const fn is_expense(self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Makan => write!(f, "Makan"),
            Self::Transportasi => write!(f, "Transportasi"),
            Self::Rokok => write!(f, "Rokok"),
            Self::Belanja => write!(f, "Belanja"),
            Self::Lainnya => write!(f, "Lainnya"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A single expense or income record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Expense or income.
    pub kind: TransactionKind,
    /// Amount in whole rupiah, always positive; the kind carries the sign.
    pub amount: Money,
    /// Category; `Income` exactly when the kind is income.
    pub category: Category,
    /// Free-text notes, empty if none.
    pub notes: String,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Full instant, used for ordering within a day.
    pub timestamp: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for recording a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    /// Expense or income.
    pub kind: TransactionKind,
    /// Amount in whole rupiah.
    pub amount: Money,
    /// Category; expenses pick a spending category, income rows may omit
    /// it and default to `Income`.
    pub category: Option<Category>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Transaction date; defaults to today when omitted.
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    /// Validates the input and resolves the effective category.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError::NonPositiveAmount` for a zero or negative
    /// amount, `TransactionError::NotesTooLong` for notes over 200
    /// characters, and `TransactionError::CategoryMismatch` when an expense
    /// carries `Income` (or no category) or an income row carries a
    /// spending category.
    pub fn validate(&self) -> Result<Category, TransactionError> {
        if self.amount <= Money::ZERO {
            return Err(TransactionError::NonPositiveAmount);
        }
        if self.notes.chars().count() > MAX_NOTES_LEN {
            return Err(TransactionError::NotesTooLong);
        }
        match (self.kind, self.category) {
            (TransactionKind::Expense, Some(category)) if category.is_expense() => Ok(category),
            (TransactionKind::Income, Some(Category::Income) | None) => Ok(Category::Income),
            (kind, _) => Err(TransactionError::CategoryMismatch { kind }),
        }
    }
}
