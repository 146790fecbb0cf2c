//! `SeaORM` Entity for the investments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::InvestmentCategory;

/// One investment holding.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "investments")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Asset class.
    pub category: InvestmentCategory,
    /// Monthly contribution in whole rupiah.
    pub monthly_contribution: i64,
    /// Current value in whole rupiah.
    pub current_value: i64,
    /// Date the holding was purchased.
    pub purchase_date: Date,
    /// Free-text notes.
    pub notes: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for arta_core::portfolio::Investment {
    fn from(model: Model) -> Self {
        Self {
            id: arta_shared::types::InvestmentId::from_uuid(model.id),
            name: model.name,
            category: model.category.into(),
            monthly_contribution: arta_shared::types::Money::new(model.monthly_contribution),
            current_value: arta_shared::types::Money::new(model.current_value),
            purchase_date: model.purchase_date,
            notes: model.notes,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
