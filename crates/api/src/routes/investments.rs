//! Investment routes: holding CRUD and portfolio metrics.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use arta_core::portfolio::{
    InvestmentCategory, MAX_NAME_LEN, NewInvestment, portfolio_metrics,
};
use arta_db::repositories::{
    CreateInvestmentInput, InvestmentError, InvestmentRepository, UpdateInvestmentInput,
};
use arta_shared::types::{InvestmentId, Money, UserId};

use crate::AppState;

/// Creates the investment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/investments",
            get(list_investments).post(create_investment),
        )
        .route(
            "/users/{user_id}/investments/{id}",
            patch(update_investment).delete(delete_investment),
        )
        .route("/users/{user_id}/portfolio", get(get_portfolio))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for updating an investment.
#[derive(Debug, Deserialize)]
pub struct UpdateInvestmentRequest {
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

// ============================================================================
// Helper Functions
// ============================================================================

fn repo_error(err: &InvestmentError) -> axum::response::Response {
    match err {
        InvestmentError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        InvestmentError::Database(e) => {
            error!(error = %e, "Investment database operation failed");
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

/// GET /users/{user_id}/investments
#[axum::debug_handler]
async fn list_investments(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = InvestmentRepository::new((*state.db).clone());

    match repo.list(UserId::from_uuid(user_id)).await {
        Ok(investments) => (StatusCode::OK, Json(investments)).into_response(),
        Err(e) => repo_error(&e),
    }
}

/// POST /users/{user_id}/investments
#[axum::debug_handler]
async fn create_investment(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<NewInvestment>,
) -> impl IntoResponse {
    if let Err(e) = body.validate() {
        return validation_error(e.to_string());
    }

    let repo = InvestmentRepository::new((*state.db).clone());
    let input = CreateInvestmentInput {
        name: body.name,
        category: body.category,
        monthly_contribution: body.monthly_contribution,
        current_value: body.current_value,
        purchase_date: body.purchase_date,
        notes: body.notes,
    };

    match repo.create(UserId::from_uuid(user_id), input).await {
        Ok(investment) => (StatusCode::CREATED, Json(investment)).into_response(),
        Err(e) => repo_error(&e),
    }
}

/// PATCH /users/{user_id}/investments/{id}
#[axum::debug_handler]
async fn update_investment(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
    Json(body): Json<UpdateInvestmentRequest>,
) -> impl IntoResponse {
    if let Some(name) = &body.name {
        let name_chars = name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_LEN {
            return validation_error("Investment name must be 1-255 characters".to_string());
        }
    }
    if body.monthly_contribution.is_some_and(|amount| amount <= Money::ZERO)
        || body.current_value.is_some_and(|amount| amount <= Money::ZERO)
    {
        return validation_error("Contribution and value must be positive".to_string());
    }

    let repo = InvestmentRepository::new((*state.db).clone());
    let input = UpdateInvestmentInput {
        name: body.name,
        category: body.category,
        monthly_contribution: body.monthly_contribution,
        current_value: body.current_value,
        purchase_date: body.purchase_date,
        notes: body.notes,
    };

    match repo
        .update(
            UserId::from_uuid(user_id),
            InvestmentId::from_uuid(id),
            input,
        )
        .await
    {
        Ok(investment) => (StatusCode::OK, Json(investment)).into_response(),
        Err(e) => repo_error(&e),
    }
}

/// DELETE /users/{user_id}/investments/{id}
#[axum::debug_handler]
async fn delete_investment(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = InvestmentRepository::new((*state.db).clone());

    match repo
        .delete(UserId::from_uuid(user_id), InvestmentId::from_uuid(id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => repo_error(&e),
    }
}

/// GET /users/{user_id}/portfolio
#[axum::debug_handler]
async fn get_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = InvestmentRepository::new((*state.db).clone());

    match repo.list(UserId::from_uuid(user_id)).await {
        Ok(investments) => (StatusCode::OK, Json(portfolio_metrics(&investments))).into_response(),
        Err(e) => repo_error(&e),
    }
}
