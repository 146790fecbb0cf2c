//! CSV export of all user data.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use arta_core::calendar;
use arta_core::export::export_csv;
use arta_db::repositories::{
    GoalRepository, InvestmentRepository, ProgressRepository, TransactionRepository,
};
use arta_shared::types::UserId;

use crate::AppState;

/// Creates the export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/export", get(export_all))
}

fn internal_error(err: &dyn std::fmt::Display) -> axum::response::Response {
    error!(error = %err, "Export failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

fn export_filename(today: NaiveDate) -> String {
    format!("finansial-export-{today}.csv")
}

/// GET /users/{user_id}/export
///
/// Streams the full sectioned CSV as a download.
#[axum::debug_handler]
async fn export_all(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> impl IntoResponse {
    let user_id = UserId::from_uuid(user_id);
    let transaction_repo = TransactionRepository::new((*state.db).clone());
    let investment_repo = InvestmentRepository::new((*state.db).clone());
    let goal_repo = GoalRepository::new((*state.db).clone());
    let progress_repo = ProgressRepository::new((*state.db).clone());

    let (transactions, investments, goals, entries) = tokio::join!(
        transaction_repo.list(user_id, None),
        investment_repo.list(user_id),
        goal_repo.list(user_id),
        progress_repo.list_for_user(user_id)
    );
    let transactions = match transactions {
        Ok(transactions) => transactions,
        Err(e) => return internal_error(&e),
    };
    let investments = match investments {
        Ok(investments) => investments,
        Err(e) => return internal_error(&e),
    };
    let goals = match goals {
        Ok(goals) => goals,
        Err(e) => return internal_error(&e),
    };
    let entries = match entries {
        Ok(entries) => entries,
        Err(e) => return internal_error(&e),
    };

    let today = calendar::today();
    let csv = match export_csv(&transactions, &investments, &goals, &entries, today) {
        Ok(csv) => csv,
        Err(e) => return internal_error(&e),
    };

    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export_filename(today)),
            ),
        ],
        csv,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_carries_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(export_filename(date), "finansial-export-2026-02-14.csv");
    }
}
