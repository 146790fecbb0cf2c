//! Timeline adherence risk classification.

use arta_shared::types::Money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Goal;
use crate::calendar;

/// Risk that a goal misses its deadline at the current savings pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// On track or ahead of the linear pace.
    Low,
    /// Somewhat behind the linear pace.
    Medium,
    /// Significantly behind the linear pace.
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Classifies how a goal's actual progress compares to a linear pace.
///
/// The expectation is uniform saving from creation to deadline: with half
/// the span elapsed, half the target should be saved. Actual progress at or
/// above 90% of that expectation is LOW risk (the boundary is inclusive),
/// at or above 60% is MEDIUM, below is HIGH. A simple heuristic, not a
/// forecast model.
#[must_use]
pub fn timeline_risk(goal: &Goal, total_saved: Money, today: NaiveDate) -> RiskLevel {
    let months_remaining = calendar::approx_months_between(today, goal.deadline);

    // Elapsed-plus-remaining span in 30-day months, minimum 1 so the
    // expectation below never divides by zero.
    let created = calendar::local_date(goal.created_at);
    let total_months = calendar::approx_months_between(created, goal.deadline).max(1);
    let elapsed_months = total_months.saturating_sub(months_remaining);

    let expected_pct =
        Decimal::from(elapsed_months) / Decimal::from(total_months) * Decimal::ONE_HUNDRED;
    let actual_pct = total_saved.percent_of(goal.target_amount);

    if actual_pct >= expected_pct * Decimal::new(9, 1) {
        RiskLevel::Low
    } else if actual_pct >= expected_pct * Decimal::new(6, 1) {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
