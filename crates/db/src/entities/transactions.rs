//! `SeaORM` Entity for the transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{TransactionCategory, TransactionKind};

/// One expense or income row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Expense or income.
    pub kind: TransactionKind,
    /// Amount in whole rupiah, always positive.
    pub amount: i64,
    /// Category label.
    pub category: TransactionCategory,
    /// Free-text notes.
    pub notes: String,
    /// Calendar date of the transaction.
    pub date: Date,
    /// Full instant, used for ordering within a day.
    pub timestamp: DateTimeWithTimeZone,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for arta_core::transaction::Transaction {
    fn from(model: Model) -> Self {
        Self {
            id: arta_shared::types::TransactionId::from_uuid(model.id),
            kind: model.kind.into(),
            amount: arta_shared::types::Money::new(model.amount),
            category: model.category.into(),
            notes: model.notes,
            date: model.date,
            timestamp: model.timestamp.to_utc(),
            created_at: model.created_at.to_utc(),
        }
    }
}
