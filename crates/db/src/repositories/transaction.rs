//! Transaction repository for expense/income database operations.

use arta_core::transaction::{Category, Transaction, TransactionKind};
use arta_shared::types::{Money, MonthKey, TransactionId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums, transactions};

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),

    /// Category does not match the transaction kind.
    #[error("Category does not match transaction kind")]
    CategoryMismatch,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Expense or income.
    pub kind: TransactionKind,
    /// Amount in whole rupiah.
    pub amount: Money,
    /// Category, already validated against the kind.
    pub category: Category,
    /// Free-text notes.
    pub notes: String,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Full instant, used for ordering within a day.
    pub timestamp: DateTime<Utc>,
}

/// Input for updating a transaction. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    /// New kind.
    pub kind: Option<TransactionKind>,
    /// New amount.
    pub amount: Option<Money>,
    /// New category.
    pub category: Option<Category>,
    /// New notes.
    pub notes: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
}

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's transactions, newest first, optionally restricted
    /// to one calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn list(
        &self,
        user_id: UserId,
        month: Option<MonthKey>,
    ) -> Result<Vec<Transaction>, TransactionError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()));

        if let Some(month) = month {
            query = query
                .filter(transactions::Column::Date.gte(month.first_day()))
                .filter(transactions::Column::Date.lt(month.succ().first_day()));
        }

        let models = query
            .order_by_desc(transactions::Column::Timestamp)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Records a new transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        &self,
        user_id: UserId,
        input: CreateTransactionInput,
    ) -> Result<Transaction, TransactionError> {
        let model = Self::build_model(user_id, &input).insert(&self.db).await?;
        Ok(model.into())
    }

    /// Updates a transaction. `None` fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError::NotFound` if the transaction does not
    /// exist for this user and `TransactionError::CategoryMismatch` if the
    /// resulting kind/category combination is inconsistent.
    pub async fn update(
        &self,
        user_id: UserId,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> Result<Transaction, TransactionError> {
        let model = self.find_owned(user_id, id).await?;

        let kind = input.kind.unwrap_or_else(|| model.kind.into());
        let category = input.category.unwrap_or_else(|| model.category.into());
        let consistent = match kind {
            TransactionKind::Expense => category.is_expense(),
            TransactionKind::Income => category == Category::Income,
        };
        if !consistent {
            return Err(TransactionError::CategoryMismatch);
        }

        let mut active: transactions::ActiveModel = model.into();
        active.kind = Set(sea_orm_active_enums::TransactionKind::from(kind));
        active.category = Set(sea_orm_active_enums::TransactionCategory::from(category));
        if let Some(amount) = input.amount {
            active.amount = Set(amount.rupiah());
        }
        if let Some(notes) = input.notes {
            active.notes = Set(notes);
        }
        if let Some(date) = input.date {
            active.date = Set(date);
        }

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns `TransactionError::NotFound` if the transaction does not
    /// exist for this user.
    pub async fn delete(&self, user_id: UserId, id: TransactionId) -> Result<(), TransactionError> {
        let model = self.find_owned(user_id, id).await?;
        transactions::Entity::delete_by_id(model.id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Bulk-inserts transactions, used by the one-way local-to-remote
    /// migration. Returns the number of rows imported.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn import(
        &self,
        user_id: UserId,
        inputs: &[CreateTransactionInput],
    ) -> Result<u64, TransactionError> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let models = inputs.iter().map(|input| Self::build_model(user_id, input));
        transactions::Entity::insert_many(models)
            .exec(&self.db)
            .await?;

        Ok(u64::try_from(inputs.len()).unwrap_or(u64::MAX))
    }

    async fn find_owned(
        &self,
        user_id: UserId,
        id: TransactionId,
    ) -> Result<transactions::Model, TransactionError> {
        transactions::Entity::find_by_id(id.into_inner())
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(TransactionError::NotFound(id.into_inner()))
    }

    fn build_model(user_id: UserId, input: &CreateTransactionInput) -> transactions::ActiveModel {
        transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.into_inner()),
            kind: Set(sea_orm_active_enums::TransactionKind::from(input.kind)),
            amount: Set(input.amount.rupiah()),
            category: Set(sea_orm_active_enums::TransactionCategory::from(
                input.category,
            )),
            notes: Set(input.notes.clone()),
            date: Set(input.date),
            timestamp: Set(input.timestamp.into()),
            created_at: Set(Utc::now().into()),
        }
    }
}
