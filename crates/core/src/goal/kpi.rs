//! Dashboard KPI aggregation across all goals.

use arta_shared::types::Money;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::progress::calculate_goal_progress;
use super::risk::{RiskLevel, timeline_risk};
use super::status::resolve_status;
use super::types::{Goal, GoalStatus, ProgressEntry};

/// Aggregated goal metrics for the KPI dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalKpis {
    /// Number of goals.
    pub total_goals: u32,
    /// Goals whose saved amount reached the target.
    pub completed_goals: u32,
    /// Goals currently resolved as in-progress.
    pub in_progress_goals: u32,
    /// Mean percent-complete across all goals, rounded.
    pub overall_progress_percent: u8,
    /// Goals classified LOW risk.
    pub on_track_goals: u32,
    /// On-track goals as a rounded percentage of all goals.
    pub adherence_percent: u8,
    /// Overall risk from the adherence percentage.
    pub overall_risk: RiskLevel,
}

/// Computes dashboard KPIs over all goals and progress entries.
///
/// With zero goals every count and percentage is zero (no division takes
/// place) and the overall risk falls through to HIGH.
#[must_use]
pub fn goal_kpis(goals: &[Goal], entries: &[ProgressEntry], today: NaiveDate) -> GoalKpis {
    let total_goals = u32::try_from(goals.len()).unwrap_or(u32::MAX);

    let mut completed_goals = 0u32;
    let mut in_progress_goals = 0u32;
    let mut on_track_goals = 0u32;
    let mut percent_sum = 0u32;

    for goal in goals {
        let progress = calculate_goal_progress(goal, entries, today);
        percent_sum += u32::from(progress.percent_complete);
        if progress.total_saved >= goal.target_amount {
            completed_goals += 1;
        }
        if resolve_status(goal, progress.total_saved, today) == GoalStatus::InProgress {
            in_progress_goals += 1;
        }
        if timeline_risk(goal, progress.total_saved, today) == RiskLevel::Low {
            on_track_goals += 1;
        }
    }

    let overall_progress_percent = if total_goals == 0 {
        0
    } else {
        round_ratio_percent(percent_sum, total_goals * 100)
    };
    let adherence_percent = if total_goals == 0 {
        0
    } else {
        round_ratio_percent(on_track_goals, total_goals)
    };

    // At least 70% of goals on track is LOW overall risk, 40% is MEDIUM.
    let overall_risk = if adherence_percent >= 70 {
        RiskLevel::Low
    } else if adherence_percent >= 40 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    GoalKpis {
        total_goals,
        completed_goals,
        in_progress_goals,
        overall_progress_percent,
        on_track_goals,
        adherence_percent,
        overall_risk,
    }
}

/// Rounds `numerator / denominator` to a whole percentage.
fn round_ratio_percent(numerator: u32, denominator: u32) -> u8 {
    let percent = Decimal::from(numerator) / Decimal::from(denominator) * Decimal::ONE_HUNDRED;
    let rounded = percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
