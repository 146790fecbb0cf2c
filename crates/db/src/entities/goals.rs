//! `SeaORM` Entity for the goals table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{GoalCategory, GoalPriority, GoalStatus};

/// One savings goal.
///
/// There is no derived-status column: status is recomputed from progress
/// on every read, and `status_override` is the only stored status field.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Goal name, unique per user.
    pub name: String,
    /// Goal category.
    pub category: GoalCategory,
    /// Target amount in whole rupiah.
    pub target_amount: i64,
    /// Date by which the target should be reached.
    pub deadline: Date,
    /// Priority.
    pub priority: GoalPriority,
    /// Manually-set status that bypasses derivation when present.
    pub status_override: Option<GoalStatus>,
    /// Free-text funding notes.
    pub funding_notes: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::progress_entries::Entity")]
    ProgressEntries,
}

impl Related<super::progress_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for arta_core::goal::Goal {
    fn from(model: Model) -> Self {
        Self {
            id: arta_shared::types::GoalId::from_uuid(model.id),
            name: model.name,
            category: model.category.into(),
            target_amount: arta_shared::types::Money::new(model.target_amount),
            deadline: model.deadline,
            priority: model.priority.into(),
            status_override: model.status_override.map(Into::into),
            funding_notes: model.funding_notes,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
