//! Goal routes: CRUD plus monthly progress upserts.
//!
//! Goal reads return the derived view (status, percent complete, risk)
//! computed by the core at request time; nothing derived is persisted.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use arta_core::calendar;
use arta_core::goal::{
    Goal, GoalCategory, GoalPriority, GoalStatus, MAX_FUNDING_NOTES_LEN, MAX_NAME_LEN, NewGoal,
    NewProgressEntry, ProgressEntry, RiskLevel, calculate_goal_progress, resolve_status,
    timeline_risk,
};
use arta_db::repositories::{
    CreateGoalInput, GoalError, GoalRepository, ProgressError, ProgressRepository, UpdateGoalInput,
    UpsertProgressInput,
};
use arta_shared::types::{GoalId, Money, MonthKey, UserId};

use crate::AppState;

/// Creates the goal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/goals", get(list_goals).post(create_goal))
        .route(
            "/users/{user_id}/goals/{goal_id}",
            patch(update_goal).delete(delete_goal),
        )
        .route(
            "/users/{user_id}/goals/{goal_id}/progress",
            get(list_progress),
        )
        .route(
            "/users/{user_id}/goals/{goal_id}/progress/{month}",
            put(upsert_progress),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for updating a goal.
#[derive(Debug, Deserialize)]
pub struct UpdateGoalRequest {
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
    /// New status override; `null` clears it and returns the goal to
    /// derived status, an absent field leaves it unchanged.
    #[serde(default, deserialize_with = "double_option")]
    pub status_override: Option<Option<GoalStatus>>,
    /// New funding notes.
    pub funding_notes: Option<String>,
}

/// Distinguishes an absent `status_override` field (no change) from an
/// explicit `null` (clear the override).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<GoalStatus>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<GoalStatus>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Response Types
// ============================================================================

/// A goal with its derived figures, as shown in list and timeline views.
#[derive(Debug, Serialize)]
pub struct GoalView {
    /// The stored goal.
    #[serde(flatten)]
    pub goal: Goal,
    /// Resolved status (override first, derivation otherwise).
    pub status: GoalStatus,
    /// Exact sum of actual amounts across the goal's progress entries.
    pub total_saved: Money,
    /// Saved amount as a rounded percentage of the target, capped at 100.
    pub percent_complete: u8,
    /// Approximate 30-day months until the deadline, floored at zero.
    pub months_remaining: u32,
    /// Linear-pace risk classification.
    pub risk: RiskLevel,
}

fn goal_view(goal: Goal, entries: &[ProgressEntry], today: NaiveDate) -> GoalView {
    let progress = calculate_goal_progress(&goal, entries, today);
    let status = resolve_status(&goal, progress.total_saved, today);
    let risk = timeline_risk(&goal, progress.total_saved, today);
    GoalView {
        goal,
        status,
        total_saved: progress.total_saved,
        percent_complete: progress.percent_complete,
        months_remaining: progress.months_remaining,
        risk,
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn goal_repo_error(err: &GoalError) -> axum::response::Response {
    match err {
        GoalError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        GoalError::DuplicateName => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "duplicate_name",
                "message": err.to_string()
            })),
        )
            .into_response(),
        GoalError::Database(e) => {
            error!(error = %e, "Goal database operation failed");
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

pub(crate) fn progress_repo_error(err: &ProgressError) -> axum::response::Response {
    match err {
        ProgressError::GoalNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        ProgressError::Database(e) => {
            error!(error = %e, "Progress database operation failed");
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

/// GET /users/{user_id}/goals
#[axum::debug_handler]
async fn list_goals(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
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

    let today = calendar::today();
    let views: Vec<GoalView> = goals
        .into_iter()
        .map(|goal| goal_view(goal, &entries, today))
        .collect();

    (StatusCode::OK, Json(views)).into_response()
}

/// POST /users/{user_id}/goals
#[axum::debug_handler]
async fn create_goal(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<NewGoal>,
) -> impl IntoResponse {
    let today = calendar::today();
    if let Err(e) = body.validate(today) {
        return validation_error(e.to_string());
    }

    let repo = GoalRepository::new((*state.db).clone());
    let input = CreateGoalInput {
        name: body.name,
        category: body.category,
        target_amount: body.target_amount,
        deadline: body.deadline,
        priority: body.priority,
        funding_notes: body.funding_notes,
    };

    match repo.create(UserId::from_uuid(user_id), input).await {
        // A fresh goal has no progress entries yet.
        Ok(goal) => (StatusCode::CREATED, Json(goal_view(goal, &[], today))).into_response(),
        Err(e) => goal_repo_error(&e),
    }
}

/// PATCH /users/{user_id}/goals/{goal_id}
#[axum::debug_handler]
async fn update_goal(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<UpdateGoalRequest>,
) -> impl IntoResponse {
    if let Some(name) = &body.name {
        let name_chars = name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_LEN {
            return validation_error("Goal name must be 1-100 characters".to_string());
        }
    }
    if let Some(target_amount) = body.target_amount
        && target_amount <= Money::ZERO
    {
        return validation_error("Target amount must be positive".to_string());
    }
    if let Some(funding_notes) = &body.funding_notes
        && funding_notes.chars().count() > MAX_FUNDING_NOTES_LEN
    {
        return validation_error("Funding notes must be under 500 characters".to_string());
    }

    let user_id = UserId::from_uuid(user_id);
    let goal_id = GoalId::from_uuid(goal_id);
    let goal_repo = GoalRepository::new((*state.db).clone());
    let input = UpdateGoalInput {
        name: body.name,
        category: body.category,
        target_amount: body.target_amount,
        deadline: body.deadline,
        priority: body.priority,
        status_override: body.status_override,
        funding_notes: body.funding_notes,
    };

    let goal = match goal_repo.update(user_id, goal_id, input).await {
        Ok(goal) => goal,
        Err(e) => return goal_repo_error(&e),
    };

    let progress_repo = ProgressRepository::new((*state.db).clone());
    match progress_repo.list_for_goal(user_id, goal_id).await {
        Ok(entries) => {
            (StatusCode::OK, Json(goal_view(goal, &entries, calendar::today()))).into_response()
        }
        Err(e) => progress_repo_error(&e),
    }
}

/// DELETE /users/{user_id}/goals/{goal_id}
#[axum::debug_handler]
async fn delete_goal(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = GoalRepository::new((*state.db).clone());

    match repo
        .delete(UserId::from_uuid(user_id), GoalId::from_uuid(goal_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => goal_repo_error(&e),
    }
}

/// GET /users/{user_id}/goals/{goal_id}/progress
#[axum::debug_handler]
async fn list_progress(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = ProgressRepository::new((*state.db).clone());

    match repo
        .list_for_goal(UserId::from_uuid(user_id), GoalId::from_uuid(goal_id))
        .await
    {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => progress_repo_error(&e),
    }
}

/// PUT /users/{user_id}/goals/{goal_id}/progress/{month}
///
/// Upserts one month's progress: a second PUT for the same month replaces
/// planned/actual/notes wholesale.
#[axum::debug_handler]
async fn upsert_progress(
    State(state): State<AppState>,
    Path((user_id, goal_id, month)): Path<(Uuid, Uuid, MonthKey)>,
    Json(body): Json<NewProgressEntry>,
) -> impl IntoResponse {
    if let Err(e) = body.validate() {
        return validation_error(e.to_string());
    }

    let repo = ProgressRepository::new((*state.db).clone());
    let input = UpsertProgressInput {
        planned_amount: body.planned_amount,
        actual_amount: body.actual_amount,
        notes: body.notes,
    };

    match repo
        .upsert(
            UserId::from_uuid(user_id),
            GoalId::from_uuid(goal_id),
            month,
            input,
        )
        .await
    {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => progress_repo_error(&e),
    }
}
