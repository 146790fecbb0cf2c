//! Monthly timeline construction.

use std::collections::BTreeMap;

use arta_shared::types::{Money, MonthKey};
use serde::{Deserialize, Serialize};

use super::types::{Goal, ProgressEntry};

/// Default forward horizon for timeline views.
pub const DEFAULT_HORIZON_MONTHS: usize = 12;

/// One month of the forward-looking savings timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineBucket {
    /// The calendar month this bucket covers.
    pub month: MonthKey,
    /// Goals whose deadline falls in this month.
    pub goals: Vec<Goal>,
    /// Total planned savings across all goals for this month.
    pub planned_savings: Money,
    /// Total actual savings across all goals for this month.
    pub actual_savings: Money,
}

/// Builds a forward-looking month-by-month savings schedule.
///
/// Produces exactly `month_count` contiguous buckets ascending from
/// `current_month`. Goals land in the bucket matching their deadline month;
/// goals and entries outside the horizon are silently omitted.
#[must_use]
pub fn build_monthly_timeline(
    goals: &[Goal],
    entries: &[ProgressEntry],
    month_count: usize,
    current_month: MonthKey,
) -> Vec<TimelineBucket> {
    // BTreeMap keeps buckets in chronological order throughout.
    let mut buckets: BTreeMap<MonthKey, TimelineBucket> = BTreeMap::new();

    let mut month = current_month;
    for _ in 0..month_count {
        buckets.insert(
            month,
            TimelineBucket {
                month,
                goals: Vec::new(),
                planned_savings: Money::ZERO,
                actual_savings: Money::ZERO,
            },
        );
        month = month.succ();
    }

    for goal in goals {
        let deadline_month = MonthKey::from_date(goal.deadline);
        if let Some(bucket) = buckets.get_mut(&deadline_month) {
            bucket.goals.push(goal.clone());
        }
    }

    for entry in entries {
        if let Some(bucket) = buckets.get_mut(&entry.month) {
            bucket.planned_savings = bucket.planned_savings.add(entry.planned_amount);
            bucket.actual_savings = bucket.actual_savings.add(entry.actual_amount);
        }
    }

    buckets.into_values().collect()
}
