//! Transaction routes: expense/income CRUD, monthly summaries, and the
//! one-way bulk import.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use arta_core::calendar;
use arta_core::transaction::{
    Category, MAX_NOTES_LEN, MonthSummary, MonthlyTotals, NewTransaction, Transaction,
    TransactionKind, aggregate_by_month, month_summary, today_total,
};
use arta_db::repositories::{
    CreateTransactionInput, TransactionError, TransactionRepository, UpdateTransactionInput,
};
use arta_shared::types::{Money, MonthKey, TransactionId, UserId};

use crate::AppState;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/users/{user_id}/transactions/summary", get(get_summary))
        .route("/users/{user_id}/transactions/today", get(get_today_total))
        .route(
            "/users/{user_id}/transactions/import",
            post(import_transactions),
        )
        .route(
            "/users/{user_id}/transactions/{id}",
            patch(update_transaction).delete(delete_transaction),
        )
}

// ============================================================================
// Query Parameters & Request Types
// ============================================================================

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict to one calendar month.
    pub month: Option<MonthKey>,
}

/// Query parameters for the monthly summary.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Month to summarize; defaults to the current month.
    pub month: Option<MonthKey>,
    /// How many recent months the trend covers.
    pub trend_months: Option<usize>,
}

/// Request body for updating a transaction.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
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

/// One row of the bulk import payload.
#[derive(Debug, Deserialize)]
pub struct ImportTransactionRequest {
    /// Expense or income.
    pub kind: TransactionKind,
    /// Amount in whole rupiah.
    pub amount: Money,
    /// Category; income rows may omit it.
    pub category: Option<Category>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Transaction date.
    pub date: NaiveDate,
    /// Original instant, kept so imported rows sort like local ones.
    pub timestamp: Option<DateTime<Utc>>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the monthly summary endpoint.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Totals and category breakdown for the requested month.
    pub summary: MonthSummary,
    /// Income/expense/net trend over recent months, newest first.
    pub trend: Vec<MonthlyTotals>,
}

/// Response for the today endpoint.
#[derive(Debug, Serialize)]
pub struct TodayResponse {
    /// Today's date in the reference timezone.
    pub date: NaiveDate,
    /// Total spent today.
    pub total: Money,
}

/// Response for the bulk import endpoint.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Number of rows imported.
    pub imported: u64,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn repo_error(err: &TransactionError) -> axum::response::Response {
    match err {
        TransactionError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        TransactionError::CategoryMismatch => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "category_mismatch",
                "message": err.to_string()
            })),
        )
            .into_response(),
        TransactionError::Database(e) => {
            error!(error = %e, "Transaction database operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}

fn validation_error(message: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": message
        })),
    )
        .into_response()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /users/{user_id}/transactions
#[axum::debug_handler]
async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());

    match repo.list(UserId::from_uuid(user_id), query.month).await {
        Ok(transactions) => (StatusCode::OK, Json(transactions)).into_response(),
        Err(e) => repo_error(&e),
    }
}

/// POST /users/{user_id}/transactions
#[axum::debug_handler]
async fn create_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<NewTransaction>,
) -> impl IntoResponse {
    let category = match body.validate() {
        Ok(category) => category,
        Err(e) => return validation_error(e.to_string()),
    };

    let repo = TransactionRepository::new((*state.db).clone());
    let input = CreateTransactionInput {
        kind: body.kind,
        amount: body.amount,
        category,
        notes: body.notes,
        date: body.date.unwrap_or_else(calendar::today),
        timestamp: Utc::now(),
    };

    match repo.create(UserId::from_uuid(user_id), input).await {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(e) => repo_error(&e),
    }
}

/// PATCH /users/{user_id}/transactions/{id}
#[axum::debug_handler]
async fn update_transaction(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
    Json(body): Json<UpdateTransactionRequest>,
) -> impl IntoResponse {
    if let Some(amount) = body.amount
        && amount <= Money::ZERO
    {
        return validation_error("Amount must be positive".to_string());
    }
    if let Some(notes) = &body.notes
        && notes.chars().count() > MAX_NOTES_LEN
    {
        return validation_error("Notes must be under 200 characters".to_string());
    }

    let repo = TransactionRepository::new((*state.db).clone());
    let input = UpdateTransactionInput {
        kind: body.kind,
        amount: body.amount,
        category: body.category,
        notes: body.notes,
        date: body.date,
    };

    match repo
        .update(
            UserId::from_uuid(user_id),
            TransactionId::from_uuid(id),
            input,
        )
        .await
    {
        Ok(transaction) => (StatusCode::OK, Json(transaction)).into_response(),
        Err(e) => repo_error(&e),
    }
}

/// DELETE /users/{user_id}/transactions/{id}
#[axum::debug_handler]
async fn delete_transaction(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());

    match repo
        .delete(UserId::from_uuid(user_id), TransactionId::from_uuid(id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => repo_error(&e),
    }
}

/// GET /users/{user_id}/transactions/summary
#[axum::debug_handler]
async fn get_summary(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<SummaryQuery>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());

    // The trend spans several months, so fetch unfiltered and let the
    // core bucket in memory.
    let transactions: Vec<Transaction> = match repo.list(UserId::from_uuid(user_id), None).await {
        Ok(transactions) => transactions,
        Err(e) => return repo_error(&e),
    };

    let month = query.month.unwrap_or_else(calendar::current_month);
    let trend_months = query.trend_months.unwrap_or(6).clamp(1, 24);

    let response = SummaryResponse {
        summary: month_summary(&transactions, month),
        trend: aggregate_by_month(&transactions, trend_months),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /users/{user_id}/transactions/today
#[axum::debug_handler]
async fn get_today_total(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new((*state.db).clone());
    let today = calendar::today();

    let month = MonthKey::from_date(today);
    match repo.list(UserId::from_uuid(user_id), Some(month)).await {
        Ok(transactions) => (
            StatusCode::OK,
            Json(TodayResponse {
                date: today,
                total: today_total(&transactions, today),
            }),
        )
            .into_response(),
        Err(e) => repo_error(&e),
    }
}

/// POST /users/{user_id}/transactions/import
///
/// One-way local-to-remote migration: validates every row like a regular
/// creation, then inserts them in bulk. Nothing is written if any row is
/// invalid.
#[axum::debug_handler]
async fn import_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<Vec<ImportTransactionRequest>>,
) -> impl IntoResponse {
    let mut inputs = Vec::with_capacity(body.len());
    for (index, row) in body.into_iter().enumerate() {
        let draft = NewTransaction {
            kind: row.kind,
            amount: row.amount,
            category: row.category,
            notes: row.notes,
            date: Some(row.date),
        };
        let category = match draft.validate() {
            Ok(category) => category,
            Err(e) => return validation_error(format!("Row {index}: {e}")),
        };
        inputs.push(CreateTransactionInput {
            kind: draft.kind,
            amount: draft.amount,
            category,
            notes: draft.notes,
            date: row.date,
            timestamp: row.timestamp.unwrap_or_else(Utc::now),
        });
    }

    let repo = TransactionRepository::new((*state.db).clone());
    match repo.import(UserId::from_uuid(user_id), &inputs).await {
        Ok(imported) => (StatusCode::CREATED, Json(ImportResponse { imported })).into_response(),
        Err(e) => repo_error(&e),
    }
}
