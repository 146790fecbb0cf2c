//! Goal status resolution.
//!
//! Status is recomputed from data on every read rather than persisted, so
//! it can never drift stale against the underlying amounts.

use arta_shared::types::Money;
use chrono::NaiveDate;

use super::types::{Goal, GoalStatus};

/// Derives a goal's status from its deadline and saved amount.
///
/// Resolution order: completed wins over overdue, which wins over the
/// upcoming/in-progress split. A deadline equal to `today` has not passed
/// yet, so such a goal is never overdue.
#[must_use]
pub fn infer_status(goal: &Goal, total_saved: Money, today: NaiveDate) -> GoalStatus {
    if total_saved >= goal.target_amount {
        return GoalStatus::Completed;
    }
    if goal.deadline < today {
        return GoalStatus::Overdue;
    }
    if total_saved > Money::ZERO {
        GoalStatus::InProgress
    } else {
        GoalStatus::Upcoming
    }
}

/// Resolves a goal's status, honoring the user override when present.
///
/// The override is returned verbatim even when it contradicts the data: a
/// user may keep a fully-funded goal marked in-progress.
#[must_use]
pub fn resolve_status(goal: &Goal, total_saved: Money, today: NaiveDate) -> GoalStatus {
    if let Some(status) = goal.status_override {
        return status;
    }
    infer_status(goal, total_saved, today)
}
