//! Investment data types.

use std::collections::BTreeMap;

use arta_shared::types::{InvestmentId, Money};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvestmentError;

/// Maximum investment name length.
pub const MAX_NAME_LEN: usize = 255;

/// Asset class of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InvestmentCategory {
    /// Stocks.
    Saham,
    /// Gold.
    Emas,
    /// Mutual funds.
    Reksadana,
}

impl InvestmentCategory {
    /// All asset classes, in display order.
    pub const ALL: [Self; 3] = [Self::Saham, Self::Emas, Self::Reksadana];
}

impl std::fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saham => write!(f, "Saham"),
            Self::Emas => write!(f, "Emas"),
            Self::Reksadana => write!(f, "Reksadana"),
        }
    }
}

/// A single investment holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier.
    pub id: InvestmentId,
    /// Display name.
    pub name: String,
    /// Asset class.
    pub category: InvestmentCategory,
    /// Monthly contribution in whole rupiah.
    pub monthly_contribution: Money,
    /// Current value in whole rupiah.
    pub current_value: Money,
    /// Date the holding was purchased.
    pub purchase_date: NaiveDate,
    /// Free-text notes.
    pub notes: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Per-category portfolio figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    /// Number of holdings.
    pub count: u32,
    /// Total current value.
    pub total_value: Money,
    /// Total contributed.
    pub total_contributed: Money,
    /// Value minus contributions; may be negative.
    pub total_gain: Money,
}

/// Aggregated portfolio figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Total contributed across all holdings.
    pub total_contributed: Money,
    /// Total current value across all holdings.
    pub total_value: Money,
    /// Value minus contributions; may be negative.
    pub total_gain: Money,
    /// Gain as a percentage of contributions, two decimal places; zero when
    /// nothing has been contributed.
    pub gain_percent: Decimal,
    /// Per-category breakdown, every asset class present.
    pub by_category: BTreeMap<InvestmentCategory, CategoryMetrics>,
}

/// Input for creating or replacing an investment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvestment {
    /// Display name.
    pub name: String,
    /// Asset class.
    pub category: InvestmentCategory,
    /// Monthly contribution in whole rupiah.
    pub monthly_contribution: Money,
    /// Current value in whole rupiah.
    pub current_value: Money,
    /// Date the holding was purchased.
    pub purchase_date: NaiveDate,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl NewInvestment {
    /// Validates the input against creation rules.
    ///
    /// # Errors
    ///
    /// Returns `InvestmentError::NameLength` if the name is empty or over
    /// 255 characters and `InvestmentError::NonPositiveAmount` if the
    /// contribution or value is not positive.
    pub fn validate(&self) -> Result<(), InvestmentError> {
        let name_chars = self.name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_LEN {
            return Err(InvestmentError::NameLength);
        }
        if self.monthly_contribution <= Money::ZERO || self.current_value <= Money::ZERO {
            return Err(InvestmentError::NonPositiveAmount);
        }
        Ok(())
    }
}
