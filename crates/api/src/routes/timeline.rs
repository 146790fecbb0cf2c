//! Forward-looking monthly savings timeline.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arta_core::calendar;
use arta_core::goal::{DEFAULT_HORIZON_MONTHS, TimelineBucket, build_monthly_timeline};
use arta_db::repositories::{GoalRepository, ProgressRepository};
use arta_shared::types::UserId;

use crate::AppState;
use crate::routes::goals::{goal_repo_error, progress_repo_error};

/// Upper bound on the requested horizon.
const MAX_HORIZON_MONTHS: usize = 60;

/// Creates the timeline routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/timeline", get(get_timeline))
}

/// Query parameters for the timeline.
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// How many forward months to cover; defaults to 12.
    pub months: Option<usize>,
}

/// Response for the timeline endpoint.
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    /// Month buckets, ascending from the current month.
    pub buckets: Vec<TimelineBucket>,
}

fn horizon(months: Option<usize>) -> usize {
    months
        .unwrap_or(DEFAULT_HORIZON_MONTHS)
        .clamp(1, MAX_HORIZON_MONTHS)
}

/// GET /users/{user_id}/timeline
#[axum::debug_handler]
async fn get_timeline(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<TimelineQuery>,
) -> impl IntoResponse {
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

    let buckets = build_monthly_timeline(
        &goals,
        &entries,
        horizon(query.months),
        calendar::current_month(),
    );

    (StatusCode::OK, Json(TimelineResponse { buckets })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_defaults_and_clamps() {
        assert_eq!(horizon(None), DEFAULT_HORIZON_MONTHS);
        assert_eq!(horizon(Some(3)), 3);
        assert_eq!(horizon(Some(0)), 1);
        assert_eq!(horizon(Some(500)), MAX_HORIZON_MONTHS);
    }
}
