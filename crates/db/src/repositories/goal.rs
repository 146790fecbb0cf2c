//! Goal repository for savings goal database operations.

use arta_core::goal::{Goal, GoalCategory, GoalPriority, GoalStatus};
use arta_shared::types::{GoalId, Money, UserId};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::{goals, sea_orm_active_enums};

/// Error types for goal operations.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    /// Goal not found.
    #[error("Goal not found: {0}")]
    NotFound(Uuid),

    /// Goal name already exists for this user.
    #[error("Goal name already exists")]
    DuplicateName,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    /// Goal name, unique per user.
    pub name: String,
    /// Goal category.
    pub category: GoalCategory,
    /// Target amount to save.
    pub target_amount: Money,
    /// Date by which the target should be reached.
    pub deadline: NaiveDate,
    /// Priority.
    pub priority: GoalPriority,
    /// Free-text funding notes.
    pub funding_notes: String,
}

/// Input for updating a goal. `None` fields are left unchanged.
///
/// `status_override` uses a nested `Option`: the outer level means "change
/// this field", the inner level is the new value, where `None` clears the
/// override and returns the goal to derived status.
#[derive(Debug, Clone, Default)]
pub struct UpdateGoalInput {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<GoalCategory>,
    /// New target amount.
    pub target_amount: Option<Money>,
    /// New deadline.
    pub deadline: Option<NaiveDate>,
    /// New priority.
    pub priority: Option<GoalPriority>,
    /// New status override.
    pub status_override: Option<Option<GoalStatus>>,
    /// New funding notes.
    pub funding_notes: Option<String>,
}

/// Goal repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct GoalRepository {
    db: DatabaseConnection,
}

impl GoalRepository {
    /// Creates a new goal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's goals, earliest deadline first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Goal>, GoalError> {
        let models = goals::Entity::find()
            .filter(goals::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(goals::Column::Deadline)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Gets one goal by ID.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NotFound` if the goal does not exist for this
    /// user.
    pub async fn find(&self, user_id: UserId, goal_id: GoalId) -> Result<Goal, GoalError> {
        let model = self.find_owned(user_id, goal_id).await?;
        Ok(model.into())
    }

    /// Creates a new goal.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::DuplicateName` if the user already has a goal
    /// with this name.
    pub async fn create(&self, user_id: UserId, input: CreateGoalInput) -> Result<Goal, GoalError> {
        self.check_name_free(user_id, &input.name, None).await?;

        let now = Utc::now().into();
        let goal = goals::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.into_inner()),
            name: Set(input.name),
            category: Set(sea_orm_active_enums::GoalCategory::from(input.category)),
            target_amount: Set(input.target_amount.rupiah()),
            deadline: Set(input.deadline),
            priority: Set(sea_orm_active_enums::GoalPriority::from(input.priority)),
            status_override: Set(None),
            funding_notes: Set(input.funding_notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = goal.insert(&self.db).await?;
        Ok(model.into())
    }

    /// Updates a goal. `None` fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NotFound` if the goal does not exist for this
    /// user and `GoalError::DuplicateName` if renaming would collide with
    /// another goal.
    pub async fn update(
        &self,
        user_id: UserId,
        goal_id: GoalId,
        input: UpdateGoalInput,
    ) -> Result<Goal, GoalError> {
        let model = self.find_owned(user_id, goal_id).await?;

        if let Some(name) = &input.name
            && *name != model.name
        {
            self.check_name_free(user_id, name, Some(goal_id)).await?;
        }

        let mut active: goals::ActiveModel = model.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(category) = input.category {
            active.category = Set(sea_orm_active_enums::GoalCategory::from(category));
        }
        if let Some(target_amount) = input.target_amount {
            active.target_amount = Set(target_amount.rupiah());
        }
        if let Some(deadline) = input.deadline {
            active.deadline = Set(deadline);
        }
        if let Some(priority) = input.priority {
            active.priority = Set(sea_orm_active_enums::GoalPriority::from(priority));
        }
        if let Some(status_override) = input.status_override {
            active.status_override = Set(status_override
                .map(sea_orm_active_enums::GoalStatus::from));
        }
        if let Some(funding_notes) = input.funding_notes {
            active.funding_notes = Set(funding_notes);
        }

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    /// Deletes a goal. Its progress entries cascade with it.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NotFound` if the goal does not exist for this
    /// user.
    pub async fn delete(&self, user_id: UserId, goal_id: GoalId) -> Result<(), GoalError> {
        let model = self.find_owned(user_id, goal_id).await?;
        goals::Entity::delete_by_id(model.id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_owned(&self, user_id: UserId, goal_id: GoalId) -> Result<goals::Model, GoalError> {
        goals::Entity::find_by_id(goal_id.into_inner())
            .filter(goals::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(GoalError::NotFound(goal_id.into_inner()))
    }

    async fn check_name_free(
        &self,
        user_id: UserId,
        name: &str,
        exclude: Option<GoalId>,
    ) -> Result<(), GoalError> {
        let mut query = goals::Entity::find()
            .filter(goals::Column::UserId.eq(user_id.into_inner()))
            .filter(goals::Column::Name.eq(name));
        if let Some(goal_id) = exclude {
            query = query.filter(goals::Column::Id.ne(goal_id.into_inner()));
        }

        if query.one(&self.db).await?.is_some() {
            return Err(GoalError::DuplicateName);
        }
        Ok(())
    }
}
