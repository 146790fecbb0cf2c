//! Goal progress calculation.

use arta_shared::types::{Money, MonthKey};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::types::{Goal, ProgressEntry};
use crate::calendar;

/// Progress figures derived for one goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Exact sum of actual amounts across the goal's progress entries.
    pub total_saved: Money,
    /// Saved amount as a rounded percentage of the target, capped at 100.
    pub percent_complete: u8,
    /// Approximate 30-day months until the deadline, floored at zero.
    pub months_remaining: u32,
}

/// Calculates total saved, percent complete, and months remaining for a
/// goal.
///
/// Takes the full progress collection and filters by goal internally.
/// `percent_complete` is 0 when the target is non-positive rather than an
/// error; `months_remaining` uses 30-day months (see
/// [`calendar::approx_months_between`]).
#[must_use]
pub fn calculate_goal_progress(
    goal: &Goal,
    entries: &[ProgressEntry],
    today: NaiveDate,
) -> GoalProgress {
    let total_saved = Money::sum(
        entries
            .iter()
            .filter(|entry| entry.goal_id == goal.id)
            .map(|entry| entry.actual_amount),
    );

    let percent = round_percent(total_saved.percent_of(goal.target_amount));
    let percent_complete = u8::try_from(percent.min(100)).unwrap_or(100);

    let months_remaining = calendar::approx_months_between(today, goal.deadline);

    GoalProgress {
        total_saved,
        percent_complete,
        months_remaining,
    }
}

/// Planned savings for `month` as a rounded percentage of monthly income.
///
/// Sums planned amounts across all goals for the month. Zero income yields
/// zero. The rate is not capped: planning to save more than the month's
/// income reports over 100%.
#[must_use]
pub fn savings_rate(entries: &[ProgressEntry], monthly_income: Money, month: MonthKey) -> u32 {
    if monthly_income <= Money::ZERO {
        return 0;
    }
    let total_planned = Money::sum(
        entries
            .iter()
            .filter(|entry| entry.month == month)
            .map(|entry| entry.planned_amount),
    );
    round_percent(total_planned.percent_of(monthly_income))
}

/// Rounds a percentage to the nearest whole number, half away from zero.
fn round_percent(percent: Decimal) -> u32 {
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
