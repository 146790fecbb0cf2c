//! Postgres enum mappings and conversions to the core domain enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether a transaction moves money out or in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
pub enum TransactionKind {
    /// Money spent.
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Money received.
    #[sea_orm(string_value = "income")]
    Income,
}

/// Transaction category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_category")]
pub enum TransactionCategory {
    /// Food and drink.
    #[sea_orm(string_value = "Makan")]
    Makan,
    /// Transport.
    #[sea_orm(string_value = "Transportasi")]
    Transportasi,
    /// Cigarettes.
    #[sea_orm(string_value = "Rokok")]
    Rokok,
    /// Shopping.
    #[sea_orm(string_value = "Belanja")]
    Belanja,
    /// Everything else.
    #[sea_orm(string_value = "Lainnya")]
    Lainnya,
    /// Income rows only.
    #[sea_orm(string_value = "Income")]
    Income,
}

/// Goal category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "goal_category")]
pub enum GoalCategory {
    /// Wedding fund.
    #[sea_orm(string_value = "Pernikahan")]
    Pernikahan,
    /// House purchase or down payment.
    #[sea_orm(string_value = "Rumah")]
    Rumah,
    /// Vehicle purchase.
    #[sea_orm(string_value = "Kendaraan")]
    Kendaraan,
    /// Emergency fund.
    #[sea_orm(string_value = "Dana Darurat")]
    DanaDarurat,
    /// Vacation fund.
    #[sea_orm(string_value = "Liburan")]
    Liburan,
    /// Anything else.
    #[sea_orm(string_value = "Lainnya")]
    Lainnya,
}

/// Goal priority labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "goal_priority")]
pub enum GoalPriority {
    /// Must hit the deadline.
    #[sea_orm(string_value = "High")]
    High,
    /// Important but flexible.
    #[sea_orm(string_value = "Medium")]
    Medium,
    /// Nice to have.
    #[sea_orm(string_value = "Low")]
    Low,
}

/// Goal status labels, stored only for the manual override column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "goal_status")]
pub enum GoalStatus {
    /// No savings recorded yet.
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    /// Some savings recorded.
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    /// Target reached.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Deadline passed unfinished.
    #[sea_orm(string_value = "overdue")]
    Overdue,
}

/// Investment category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "investment_category")]
pub enum InvestmentCategory {
    /// Stocks.
    #[sea_orm(string_value = "Saham")]
    Saham,
    /// Gold.
    #[sea_orm(string_value = "Emas")]
    Emas,
    /// Mutual funds.
    #[sea_orm(string_value = "Reksadana")]
    Reksadana,
}

impl From<TransactionKind> for arta_core::transaction::TransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Expense => Self::Expense,
            TransactionKind::Income => Self::Income,
        }
    }
}

impl From<arta_core::transaction::TransactionKind> for TransactionKind {
    fn from(kind: arta_core::transaction::TransactionKind) -> Self {
        match kind {
            arta_core::transaction::TransactionKind::Expense => Self::Expense,
            arta_core::transaction::TransactionKind::Income => Self::Income,
        }
    }
}

impl From<TransactionCategory> for arta_core::transaction::Category {
    fn from(category: TransactionCategory) -> Self {
        match category {
            TransactionCategory::Makan => Self::Makan,
            TransactionCategory::Transportasi => Self::Transportasi,
            TransactionCategory::Rokok => Self::Rokok,
            TransactionCategory::Belanja => Self::Belanja,
            TransactionCategory::Lainnya => Self::Lainnya,
            TransactionCategory::Income => Self::Income,
        }
    }
}

impl From<arta_core::transaction::Category> for TransactionCategory {
    fn from(category: arta_core::transaction::Category) -> Self {
        match category {
            arta_core::transaction::Category::Makan => Self::Makan,
            arta_core::transaction::Category::Transportasi => Self::Transportasi,
            arta_core::transaction::Category::Rokok => Self::Rokok,
            arta_core::transaction::Category::Belanja => Self::Belanja,
            arta_core::transaction::Category::Lainnya => Self::Lainnya,
            arta_core::transaction::Category::Income => Self::Income,
        }
    }
}

impl From<GoalCategory> for arta_core::goal::GoalCategory {
    fn from(category: GoalCategory) -> Self {
        match category {
            GoalCategory::Pernikahan => Self::Pernikahan,
            GoalCategory::Rumah => Self::Rumah,
            GoalCategory::Kendaraan => Self::Kendaraan,
            GoalCategory::DanaDarurat => Self::DanaDarurat,
            GoalCategory::Liburan => Self::Liburan,
            GoalCategory::Lainnya => Self::Lainnya,
        }
    }
}

impl From<arta_core::goal::GoalCategory> for GoalCategory {
    fn from(category: arta_core::goal::GoalCategory) -> Self {
        match category {
            arta_core::goal::GoalCategory::Pernikahan => Self::Pernikahan,
            arta_core::goal::GoalCategory::Rumah => Self::Rumah,
            arta_core::goal::GoalCategory::Kendaraan => Self::Kendaraan,
            arta_core::goal::GoalCategory::DanaDarurat => Self::DanaDarurat,
            arta_core::goal::GoalCategory::Liburan => Self::Liburan,
            arta_core::goal::GoalCategory::Lainnya => Self::Lainnya,
        }
    }
}

impl From<GoalPriority> for arta_core::goal::GoalPriority {
    fn from(priority: GoalPriority) -> Self {
        match priority {
            GoalPriority::High => Self::High,
            GoalPriority::Medium => Self::Medium,
            GoalPriority::Low => Self::Low,
        }
    }
}

impl From<arta_core::goal::GoalPriority> for GoalPriority {
    fn from(priority: arta_core::goal::GoalPriority) -> Self {
        match priority {
            arta_core::goal::GoalPriority::High => Self::High,
            arta_core::goal::GoalPriority::Medium => Self::Medium,
            arta_core::goal::GoalPriority::Low => Self::Low,
        }
    }
}

impl From<GoalStatus> for arta_core::goal::GoalStatus {
    fn from(status: GoalStatus) -> Self {
        match status {
            GoalStatus::Upcoming => Self::Upcoming,
            GoalStatus::InProgress => Self::InProgress,
            GoalStatus::Completed => Self::Completed,
            GoalStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<arta_core::goal::GoalStatus> for GoalStatus {
    fn from(status: arta_core::goal::GoalStatus) -> Self {
        match status {
            arta_core::goal::GoalStatus::Upcoming => Self::Upcoming,
            arta_core::goal::GoalStatus::InProgress => Self::InProgress,
            arta_core::goal::GoalStatus::Completed => Self::Completed,
            arta_core::goal::GoalStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<InvestmentCategory> for arta_core::portfolio::InvestmentCategory {
    fn from(category: InvestmentCategory) -> Self {
        match category {
            InvestmentCategory::Saham => Self::Saham,
            InvestmentCategory::Emas => Self::Emas,
            InvestmentCategory::Reksadana => Self::Reksadana,
        }
    }
}

impl From<arta_core::portfolio::InvestmentCategory> for InvestmentCategory {
    fn from(category: arta_core::portfolio::InvestmentCategory) -> Self {
        match category {
            arta_core::portfolio::InvestmentCategory::Saham => Self::Saham,
            arta_core::portfolio::InvestmentCategory::Emas => Self::Emas,
            arta_core::portfolio::InvestmentCategory::Reksadana => Self::Reksadana,
        }
    }
}
