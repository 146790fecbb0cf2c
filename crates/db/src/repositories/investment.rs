//! Investment repository for portfolio holding database operations.

use arta_core::portfolio::{Investment, InvestmentCategory};
use arta_shared::types::{InvestmentId, Money, UserId};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::{investments, sea_orm_active_enums};

/// Error types for investment operations.
#[derive(Debug, thiserror::Error)]
pub enum InvestmentError {
    /// Investment not found.
    #[error("Investment not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an investment.
#[derive(Debug, Clone)]
pub struct CreateInvestmentInput {
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
}

/// Input for updating an investment. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateInvestmentInput {
    /// New name.
    pub name: Option<String>,
    /// New asset class.
    pub category: Option<InvestmentCategory>,
    /// New monthly contribution.
    pub monthly_contribution: Option<Money>,
    /// New current value.
    pub current_value: Option<Money>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// New notes.
    pub notes: Option<String>,
}

/// Investment repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct InvestmentRepository {
    db: DatabaseConnection,
}

impl InvestmentRepository {
    /// Creates a new investment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's investments, most recently purchased first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Investment>, InvestmentError> {
        let models = investments::Entity::find()
            .filter(investments::Column::UserId.eq(user_id.into_inner()))
            .order_by_desc(investments::Column::PurchaseDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Creates a new investment.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        &self,
        user_id: UserId,
        input: CreateInvestmentInput,
    ) -> Result<Investment, InvestmentError> {
        let now = Utc::now().into();
        let investment = investments::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.into_inner()),
            name: Set(input.name),
            category: Set(sea_orm_active_enums::InvestmentCategory::from(
                input.category,
            )),
            monthly_contribution: Set(input.monthly_contribution.rupiah()),
            current_value: Set(input.current_value.rupiah()),
            purchase_date: Set(input.purchase_date),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = investment.insert(&self.db).await?;
        Ok(model.into())
    }

    /// Updates an investment. `None` fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `InvestmentError::NotFound` if the investment does not exist
    /// for this user.
    pub async fn update(
        &self,
        user_id: UserId,
        id: InvestmentId,
        input: UpdateInvestmentInput,
    ) -> Result<Investment, InvestmentError> {
        let model = self.find_owned(user_id, id).await?;

        let mut active: investments::ActiveModel = model.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(category) = input.category {
            active.category = Set(sea_orm_active_enums::InvestmentCategory::from(category));
        }
        if let Some(monthly_contribution) = input.monthly_contribution {
            active.monthly_contribution = Set(monthly_contribution.rupiah());
        }
        if let Some(current_value) = input.current_value {
            active.current_value = Set(current_value.rupiah());
        }
        if let Some(purchase_date) = input.purchase_date {
            active.purchase_date = Set(purchase_date);
        }
        if let Some(notes) = input.notes {
            active.notes = Set(notes);
        }

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    /// Deletes an investment.
    ///
    /// # Errors
    ///
    /// Returns `InvestmentError::NotFound` if the investment does not exist
    /// for this user.
    pub async fn delete(&self, user_id: UserId, id: InvestmentId) -> Result<(), InvestmentError> {
        let model = self.find_owned(user_id, id).await?;
        investments::Entity::delete_by_id(model.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn find_owned(
        &self,
        user_id: UserId,
        id: InvestmentId,
    ) -> Result<investments::Model, InvestmentError> {
        investments::Entity::find_by_id(id.into_inner())
            .filter(investments::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(InvestmentError::NotFound(id.into_inner()))
    }
}
