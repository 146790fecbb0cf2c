//! Property-based and unit tests for the goal module.

use arta_shared::types::{GoalId, Money, MonthKey, ProgressEntryId};
use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use super::progress::calculate_goal_progress;
use super::risk::{RiskLevel, timeline_risk};
use super::status::{infer_status, resolve_status};
use super::timeline::build_monthly_timeline;
use super::types::{Goal, GoalCategory, GoalPriority, GoalStatus, ProgressEntry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

fn test_goal(target: i64, deadline: NaiveDate) -> Goal {
    Goal {
        id: GoalId::new(),
        name: "Dana pernikahan".to_string(),
        category: GoalCategory::Pernikahan,
        target_amount: Money::new(target),
        deadline,
        priority: GoalPriority::High,
        status_override: None,
        funding_notes: String::new(),
        created_at: Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).unwrap(),
    }
}

fn entry_for(goal: &Goal, month_key: MonthKey, planned: i64, actual: i64) -> ProgressEntry {
    ProgressEntry {
        id: ProgressEntryId::new(),
        goal_id: goal.id,
        month: month_key,
        planned_amount: Money::new(planned),
        actual_amount: Money::new(actual),
        notes: String::new(),
        created_at: Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
    }
}

proptest! {
    /// Whenever total saved reaches the target, the goal is completed
    /// regardless of its deadline, unless an override is set.
    #[test]
    fn prop_saved_target_is_completed(
        target in 1i64..1_000_000_000,
        surplus in 0i64..1_000_000,
        deadline_offset in -400i64..400,
    ) {
        let today = date(2026, 3, 10);
        let deadline = today + chrono::Duration::days(deadline_offset);
        let goal = test_goal(target, deadline);
        let saved = Money::new(target + surplus);

        prop_assert_eq!(infer_status(&goal, saved, today), GoalStatus::Completed);

        let overridden = Goal { status_override: Some(GoalStatus::InProgress), ..goal };
        prop_assert_eq!(resolve_status(&overridden, saved, today), GoalStatus::InProgress);
    }

    /// An unfinished goal whose deadline has strictly passed is overdue.
    #[test]
    fn prop_past_deadline_unfinished_is_overdue(
        target in 1i64..1_000_000_000,
        saved_fraction in 0i64..100,
        days_past in 1i64..400,
    ) {
        let today = date(2026, 3, 10);
        let goal = test_goal(target, today - chrono::Duration::days(days_past));
        // Strictly below target.
        let saved = Money::new(target * saved_fraction / 100).min(Money::new(target - 1));

        prop_assert_eq!(infer_status(&goal, saved, today), GoalStatus::Overdue);
    }

    /// Percent complete stays within [0, 100] for any non-negative saved
    /// amount and positive target.
    #[test]
    fn prop_percent_complete_bounded(
        target in 1i64..1_000_000_000,
        saved in 0i64..2_000_000_000,
    ) {
        let today = date(2026, 3, 10);
        let goal = test_goal(target, date(2026, 9, 1));
        let entries = vec![entry_for(&goal, month(2026, 1), 0, saved)];

        let progress = calculate_goal_progress(&goal, &entries, today);
        prop_assert!(progress.percent_complete <= 100);
    }

    /// The timeline always contains exactly `month_count` contiguous
    /// ascending buckets, whatever data exists.
    #[test]
    fn prop_timeline_bucket_count_and_order(
        month_count in 0usize..25,
        entry_months in prop::collection::vec((2025i32..2028, 1u32..13), 0..20),
    ) {
        let current = month(2026, 3);
        let goal = test_goal(1_000_000, date(2026, 9, 1));
        let entries: Vec<ProgressEntry> = entry_months
            .into_iter()
            .map(|(y, m)| entry_for(&goal, month(y, m), 100, 100))
            .collect();

        let timeline = build_monthly_timeline(&[goal], &entries, month_count, current);

        prop_assert_eq!(timeline.len(), month_count);
        for (i, bucket) in timeline.iter().enumerate() {
            if i > 0 {
                prop_assert_eq!(timeline[i - 1].month.succ(), bucket.month);
            }
        }
        if let Some(first) = timeline.first() {
            prop_assert_eq!(first.month, current);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::goal::error::GoalError;
    use crate::goal::kpi::goal_kpis;
    use crate::goal::progress::savings_rate;
    use crate::goal::types::{NewGoal, NewProgressEntry};
    use rstest::rstest;

    #[test]
    fn test_fully_funded_goal_is_completed() {
        let today = date(2026, 3, 10);
        let goal = test_goal(1_000_000, date(2026, 9, 1));
        let entries = vec![
            entry_for(&goal, month(2025, 12), 400_000, 400_000),
            entry_for(&goal, month(2026, 1), 300_000, 300_000),
            entry_for(&goal, month(2026, 2), 300_000, 300_000),
        ];

        let progress = calculate_goal_progress(&goal, &entries, today);
        assert_eq!(progress.total_saved, Money::new(1_000_000));
        assert_eq!(progress.percent_complete, 100);
        assert_eq!(
            resolve_status(&goal, progress.total_saved, today),
            GoalStatus::Completed
        );
    }

    #[test]
    fn test_goal_two_months_past_deadline_is_overdue() {
        let today = date(2026, 3, 10);
        let goal = test_goal(5_000_000, date(2026, 1, 10));

        let progress = calculate_goal_progress(&goal, &[], today);
        assert_eq!(progress.total_saved, Money::ZERO);
        assert_eq!(progress.months_remaining, 0);
        assert_eq!(
            resolve_status(&goal, progress.total_saved, today),
            GoalStatus::Overdue
        );
    }

    #[test]
    fn test_deadline_today_is_not_overdue() {
        let today = date(2026, 3, 10);
        let goal = test_goal(5_000_000, today);

        assert_eq!(
            infer_status(&goal, Money::new(100_000), today),
            GoalStatus::InProgress
        );
        assert_eq!(infer_status(&goal, Money::ZERO, today), GoalStatus::Upcoming);
    }

    #[rstest]
    #[case(Money::ZERO, GoalStatus::Upcoming)]
    #[case(Money::new(1), GoalStatus::InProgress)]
    #[case(Money::new(4_999_999), GoalStatus::InProgress)]
    #[case(Money::new(5_000_000), GoalStatus::Completed)]
    #[case(Money::new(6_000_000), GoalStatus::Completed)]
    fn test_status_by_saved_amount(#[case] saved: Money, #[case] expected: GoalStatus) {
        let today = date(2026, 3, 10);
        let goal = test_goal(5_000_000, date(2026, 9, 1));
        assert_eq!(infer_status(&goal, saved, today), expected);
    }

    #[test]
    fn test_override_wins_even_against_data() {
        let today = date(2026, 3, 10);
        let goal = Goal {
            status_override: Some(GoalStatus::InProgress),
            ..test_goal(1_000_000, date(2026, 9, 1))
        };

        // Fully funded, but the user says in-progress.
        assert_eq!(
            resolve_status(&goal, Money::new(1_000_000), today),
            GoalStatus::InProgress
        );
    }

    #[test]
    fn test_percent_complete_caps_at_100() {
        let today = date(2026, 3, 10);
        let goal = test_goal(1_000_000, date(2026, 9, 1));
        let entries = vec![entry_for(&goal, month(2026, 1), 0, 2_500_000)];

        let progress = calculate_goal_progress(&goal, &entries, today);
        assert_eq!(progress.percent_complete, 100);
    }

    #[test]
    fn test_percent_complete_rounds_to_nearest() {
        let today = date(2026, 3, 10);
        let goal = test_goal(3_000_000, date(2026, 9, 1));
        // 1/3 of the target: 33.33...% rounds to 33.
        let entries = vec![entry_for(&goal, month(2026, 1), 0, 1_000_000)];
        assert_eq!(
            calculate_goal_progress(&goal, &entries, today).percent_complete,
            33
        );

        // 2/3: 66.66...% rounds to 67.
        let entries = vec![entry_for(&goal, month(2026, 1), 0, 2_000_000)];
        assert_eq!(
            calculate_goal_progress(&goal, &entries, today).percent_complete,
            67
        );
    }

    #[test]
    fn test_non_positive_target_yields_zero_percent() {
        let today = date(2026, 3, 10);
        let goal = test_goal(0, date(2026, 9, 1));
        let entries = vec![entry_for(&goal, month(2026, 1), 0, 500_000)];

        let progress = calculate_goal_progress(&goal, &entries, today);
        assert_eq!(progress.percent_complete, 0);
    }

    #[test]
    fn test_progress_filters_by_goal_id() {
        let today = date(2026, 3, 10);
        let goal = test_goal(1_000_000, date(2026, 9, 1));
        let other = test_goal(1_000_000, date(2026, 9, 1));
        let entries = vec![
            entry_for(&goal, month(2026, 1), 0, 200_000),
            entry_for(&other, month(2026, 1), 0, 999_999),
        ];

        let progress = calculate_goal_progress(&goal, &entries, today);
        assert_eq!(progress.total_saved, Money::new(200_000));
    }

    #[test]
    fn test_replaced_progress_entry_counts_once() {
        let today = date(2026, 3, 10);
        let goal = test_goal(1_000_000, date(2026, 9, 1));

        // Storage upserts on (goal, month): a second write replaces the
        // first, so the collection only ever carries the latest values.
        let first = entry_for(&goal, month(2026, 1), 500_000, 300_000);
        let replaced = ProgressEntry {
            planned_amount: Money::new(500_000),
            actual_amount: Money::new(450_000),
            ..first
        };
        let entries = vec![replaced];

        let progress = calculate_goal_progress(&goal, &entries, today);
        assert_eq!(progress.total_saved, Money::new(450_000));
    }

    #[test]
    fn test_months_remaining_30_day_approximation() {
        let today = date(2026, 3, 10);
        // 92 days ahead: ceil(92 / 30) = 4, not 3 calendar months.
        let goal = test_goal(1_000_000, date(2026, 6, 10));
        let progress = calculate_goal_progress(&goal, &[], today);
        assert_eq!(progress.months_remaining, 4);
    }

    #[test]
    fn test_risk_boundary_exactly_90_percent_of_expected_is_low() {
        // Created 2025-07-05, today 90 days later, deadline 90 days after
        // that: 6 total months, 3 remaining, expected progress 50%.
        let today = date(2025, 10, 3);
        let goal = test_goal(1_000_000, date(2026, 1, 1));

        // 45% actual == 0.9 * 50% expected: inclusive LOW boundary.
        assert_eq!(
            timeline_risk(&goal, Money::new(450_000), today),
            RiskLevel::Low
        );
        // Just under the boundary drops to MEDIUM.
        assert_eq!(
            timeline_risk(&goal, Money::new(449_999), today),
            RiskLevel::Medium
        );
        // 30% actual == 0.6 * 50% expected: inclusive MEDIUM boundary.
        assert_eq!(
            timeline_risk(&goal, Money::new(300_000), today),
            RiskLevel::Medium
        );
        assert_eq!(
            timeline_risk(&goal, Money::new(299_999), today),
            RiskLevel::High
        );
    }

    #[test]
    fn test_risk_low_when_nothing_expected_yet() {
        // Created today: zero elapsed, zero expected, zero saved is on pace.
        let today = date(2025, 7, 5);
        let goal = test_goal(1_000_000, date(2026, 7, 5));
        assert_eq!(timeline_risk(&goal, Money::ZERO, today), RiskLevel::Low);
    }

    #[test]
    fn test_timeline_three_empty_buckets() {
        let timeline = build_monthly_timeline(&[], &[], 3, month(2026, 3));

        assert_eq!(timeline.len(), 3);
        let months: Vec<String> = timeline.iter().map(|b| b.month.to_string()).collect();
        assert_eq!(months, ["2026-03", "2026-04", "2026-05"]);
        for bucket in &timeline {
            assert!(bucket.goals.is_empty());
            assert_eq!(bucket.planned_savings, Money::ZERO);
            assert_eq!(bucket.actual_savings, Money::ZERO);
        }
    }

    #[test]
    fn test_timeline_places_goal_in_deadline_month() {
        let goal = test_goal(1_000_000, date(2026, 5, 20));
        let timeline = build_monthly_timeline(&[goal.clone()], &[], 12, month(2026, 3));

        let bucket = timeline.iter().find(|b| b.month == month(2026, 5)).unwrap();
        assert_eq!(bucket.goals.len(), 1);
        assert_eq!(bucket.goals[0].id, goal.id);
        assert!(
            timeline
                .iter()
                .filter(|b| b.month != month(2026, 5))
                .all(|b| b.goals.is_empty())
        );
    }

    #[test]
    fn test_timeline_omits_goal_beyond_horizon() {
        let goal = test_goal(1_000_000, date(2027, 6, 1));
        let timeline = build_monthly_timeline(&[goal], &[], 12, month(2026, 3));
        assert!(timeline.iter().all(|b| b.goals.is_empty()));
    }

    #[test]
    fn test_timeline_aggregates_entries_within_horizon() {
        let goal_a = test_goal(1_000_000, date(2026, 9, 1));
        let goal_b = test_goal(2_000_000, date(2026, 10, 1));
        let entries = vec![
            entry_for(&goal_a, month(2026, 4), 500_000, 450_000),
            entry_for(&goal_b, month(2026, 4), 300_000, 300_000),
            // Before the horizon: ignored.
            entry_for(&goal_a, month(2026, 2), 999_999, 999_999),
        ];

        let timeline =
            build_monthly_timeline(&[goal_a, goal_b], &entries, 12, month(2026, 3));
        let april = timeline.iter().find(|b| b.month == month(2026, 4)).unwrap();
        assert_eq!(april.planned_savings, Money::new(800_000));
        assert_eq!(april.actual_savings, Money::new(750_000));

        let march = timeline.iter().find(|b| b.month == month(2026, 3)).unwrap();
        assert_eq!(march.planned_savings, Money::ZERO);
    }

    #[test]
    fn test_savings_rate_zero_income_is_zero() {
        let goal = test_goal(1_000_000, date(2026, 9, 1));
        let entries = vec![entry_for(&goal, month(2026, 3), 500_000, 0)];
        assert_eq!(savings_rate(&entries, Money::ZERO, month(2026, 3)), 0);
    }

    #[test]
    fn test_savings_rate_planned_share_of_income() {
        let goal_a = test_goal(1_000_000, date(2026, 9, 1));
        let goal_b = test_goal(2_000_000, date(2026, 10, 1));
        let entries = vec![
            entry_for(&goal_a, month(2026, 3), 1_500_000, 0),
            entry_for(&goal_b, month(2026, 3), 1_000_000, 0),
            // Different month: excluded.
            entry_for(&goal_a, month(2026, 2), 9_000_000, 0),
        ];

        // 2.5jt planned of 10jt income.
        assert_eq!(
            savings_rate(&entries, Money::new(10_000_000), month(2026, 3)),
            25
        );
    }

    #[test]
    fn test_zero_goals_yields_zeroed_kpis() {
        let today = date(2026, 3, 10);
        let kpis = goal_kpis(&[], &[], today);

        assert_eq!(kpis.total_goals, 0);
        assert_eq!(kpis.completed_goals, 0);
        assert_eq!(kpis.overall_progress_percent, 0);
        assert_eq!(kpis.adherence_percent, 0);
    }

    #[test]
    fn test_kpis_over_mixed_goals() {
        let today = date(2025, 7, 5);
        // Created today, so expected pace is 0% and both are LOW risk.
        let funded = test_goal(1_000_000, date(2026, 7, 5));
        let empty = test_goal(1_000_000, date(2026, 7, 5));
        let entries = vec![entry_for(&funded, month(2025, 7), 0, 1_000_000)];

        let kpis = goal_kpis(&[funded, empty], &entries, today);
        assert_eq!(kpis.total_goals, 2);
        assert_eq!(kpis.completed_goals, 1);
        assert_eq!(kpis.on_track_goals, 2);
        assert_eq!(kpis.adherence_percent, 100);
        // Mean of 100% and 0%.
        assert_eq!(kpis.overall_progress_percent, 50);
        assert_eq!(kpis.overall_risk, RiskLevel::Low);
    }

    fn new_goal_input() -> NewGoal {
        NewGoal {
            name: "Dana rumah".to_string(),
            category: GoalCategory::Rumah,
            target_amount: Money::new(250_000_000),
            deadline: date(2027, 6, 1),
            priority: GoalPriority::High,
            funding_notes: String::new(),
        }
    }

    #[test]
    fn test_valid_goal_input_passes() {
        assert!(new_goal_input().validate(date(2026, 3, 10)).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(&"x".repeat(101))]
    fn test_bad_goal_name_rejected(#[case] name: &str) {
        let goal = NewGoal {
            name: name.to_string(),
            ..new_goal_input()
        };
        assert_eq!(goal.validate(date(2026, 3, 10)), Err(GoalError::NameLength));
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let goal = NewGoal {
            target_amount: Money::ZERO,
            ..new_goal_input()
        };
        assert_eq!(
            goal.validate(date(2026, 3, 10)),
            Err(GoalError::NonPositiveTarget)
        );
    }

    #[test]
    fn test_deadline_today_rejected_at_creation() {
        let today = date(2026, 3, 10);
        let goal = NewGoal {
            deadline: today,
            ..new_goal_input()
        };
        assert_eq!(goal.validate(today), Err(GoalError::DeadlineNotFuture(today)));
    }

    #[test]
    fn test_long_funding_notes_rejected() {
        let goal = NewGoal {
            funding_notes: "x".repeat(501),
            ..new_goal_input()
        };
        assert_eq!(
            goal.validate(date(2026, 3, 10)),
            Err(GoalError::FundingNotesTooLong)
        );
    }

    #[test]
    fn test_progress_entry_rules() {
        let valid = NewProgressEntry {
            planned_amount: Money::new(5_000_000),
            actual_amount: Money::new(4_500_000),
            notes: "Gaji bulan ini".to_string(),
        };
        assert!(valid.validate().is_ok());

        let negative = NewProgressEntry {
            actual_amount: Money::new(-1),
            ..valid.clone()
        };
        assert_eq!(negative.validate(), Err(GoalError::NegativeAmount));

        let long_notes = NewProgressEntry {
            notes: "x".repeat(201),
            ..valid
        };
        assert_eq!(long_notes.validate(), Err(GoalError::ProgressNotesTooLong));
    }
}
