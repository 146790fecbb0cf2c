//! Progress entry repository for monthly goal progress operations.

use arta_core::goal::ProgressEntry;
use arta_shared::types::{GoalId, Money, MonthKey, UserId};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{goals, progress_entries};

/// Error types for progress entry operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Owning goal not found.
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for upserting one month's progress on a goal.
#[derive(Debug, Clone)]
pub struct UpsertProgressInput {
    /// Amount the user plans to save this month.
    pub planned_amount: Money,
    /// Amount actually saved this month.
    pub actual_amount: Money,
    /// Free-text notes.
    pub notes: String,
}

/// Progress entry repository.
///
/// Writes go through a single upsert keyed on (user, goal, month): a
/// second write for the same month replaces planned/actual/notes wholesale
/// rather than duplicating the row.
#[derive(Debug, Clone)]
pub struct ProgressRepository {
    db: DatabaseConnection,
}

impl ProgressRepository {
    /// Creates a new progress repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts one month's progress for a goal.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::GoalNotFound` if the goal does not exist for
    /// this user.
    pub async fn upsert(
        &self,
        user_id: UserId,
        goal_id: GoalId,
        month: MonthKey,
        input: UpsertProgressInput,
    ) -> Result<ProgressEntry, ProgressError> {
        self.check_goal_owned(user_id, goal_id).await?;

        let now = Utc::now().into();
        let entry = progress_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.into_inner()),
            goal_id: Set(goal_id.into_inner()),
            month: Set(month.first_day()),
            planned_amount: Set(input.planned_amount.rupiah()),
            actual_amount: Set(input.actual_amount.rupiah()),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = progress_entries::Entity::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    progress_entries::Column::UserId,
                    progress_entries::Column::GoalId,
                    progress_entries::Column::Month,
                ])
                .update_columns([
                    progress_entries::Column::PlannedAmount,
                    progress_entries::Column::ActualAmount,
                    progress_entries::Column::Notes,
                    progress_entries::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        Ok(model.into())
    }

    /// Lists one goal's progress entries, oldest month first.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::GoalNotFound` if the goal does not exist for
    /// this user.
    pub async fn list_for_goal(
        &self,
        user_id: UserId,
        goal_id: GoalId,
    ) -> Result<Vec<ProgressEntry>, ProgressError> {
        self.check_goal_owned(user_id, goal_id).await?;

        let models = progress_entries::Entity::find()
            .filter(progress_entries::Column::UserId.eq(user_id.into_inner()))
            .filter(progress_entries::Column::GoalId.eq(goal_id.into_inner()))
            .order_by_asc(progress_entries::Column::Month)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Lists all of the user's progress entries across goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<ProgressEntry>, ProgressError> {
        let models = progress_entries::Entity::find()
            .filter(progress_entries::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(progress_entries::Column::Month)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn check_goal_owned(&self, user_id: UserId, goal_id: GoalId) -> Result<(), ProgressError> {
        goals::Entity::find_by_id(goal_id.into_inner())
            .filter(goals::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(ProgressError::GoalNotFound(goal_id.into_inner()))?;
        Ok(())
    }
}
