//! Dashboard routes: aggregated goal KPIs.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use arta_core::calendar;
use arta_core::goal::goal_kpis;
use arta_db::repositories::{GoalRepository, ProgressRepository};
use arta_shared::types::UserId;

use crate::AppState;
use crate::routes::goals::{goal_repo_error, progress_repo_error};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/dashboard/kpis", get(get_kpis))
}

/// GET /users/{user_id}/dashboard/kpis
#[axum::debug_handler]
async fn get_kpis(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> impl IntoResponse {
    let user_id = UserId::from_uuid(user_id);
    let goal_repo = GoalRepository::new((*state.db).clone());
    let progress_repo = ProgressRepository::new((*state.db).clone());

    let (goals, entries) = tokio::join!(
        goal_repo.list(user_id),
        progress_repo.list_for_user(user_id)
    );
    let goals = match goals {
        Ok(goals) => goals,
        Err(e) => return goal_repo_error(&e),
    };
    let entries = match entries {
        Ok(entries) => entries,
        Err(e) => return progress_repo_error(&e),
    };

    let kpis = goal_kpis(&goals, &entries, calendar::today());
    (StatusCode::OK, Json(kpis)).into_response()
}
