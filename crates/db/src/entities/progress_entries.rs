//! `SeaORM` Entity for the progress_entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One goal's planned vs. actual savings for one calendar month.
///
/// The month is stored as the first day of the month; the unique key
/// (user_id, goal_id, month) makes inserts for an existing month upserts
/// that replace planned/actual/notes wholesale.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "progress_entries")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Owning goal.
    pub goal_id: Uuid,
    /// First day of the covered month.
    pub month: Date,
    /// Planned amount in whole rupiah, non-negative.
    pub planned_amount: i64,
    /// Actual amount in whole rupiah, non-negative.
    pub actual_amount: i64,
    /// Free-text notes.
    pub notes: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::goals::Entity",
        from = "Column::GoalId",
        to = "super::goals::Column::Id"
    )]
    Goals,
}

impl Related<super::goals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for arta_core::goal::ProgressEntry {
    fn from(model: Model) -> Self {
        Self {
            id: arta_shared::types::ProgressEntryId::from_uuid(model.id),
            goal_id: arta_shared::types::GoalId::from_uuid(model.goal_id),
            month: arta_shared::types::MonthKey::from_date(model.month),
            planned_amount: arta_shared::types::Money::new(model.planned_amount),
            actual_amount: arta_shared::types::Money::new(model.actual_amount),
            notes: model.notes,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
