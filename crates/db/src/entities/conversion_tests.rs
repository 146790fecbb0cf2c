//! Tests for entity-to-domain conversions.
//!
//! Repository behavior against a live database is pinned by the migration
//! SQL's constraints; these tests cover the pure mapping from stored rows
//! to core types.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use sea_orm::Iterable;
use uuid::Uuid;

use super::sea_orm_active_enums::{
    GoalCategory, GoalPriority, GoalStatus, InvestmentCategory, TransactionCategory,
    TransactionKind,
};
use super::{goals, progress_entries, transactions};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_goal_model_maps_to_core() {
    let created = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let model = goals::Model {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        name: "Dana Darurat".to_string(),
        category: GoalCategory::DanaDarurat,
        target_amount: 75_000_000,
        deadline: date(2026, 12, 1),
        priority: GoalPriority::High,
        status_override: Some(GoalStatus::InProgress),
        funding_notes: "Transfer tiap gajian".to_string(),
        created_at: created.into(),
        updated_at: created.into(),
    };

    let goal: arta_core::goal::Goal = model.into();
    assert_eq!(goal.target_amount.rupiah(), 75_000_000);
    assert_eq!(goal.deadline, date(2026, 12, 1));
    assert_eq!(
        goal.status_override,
        Some(arta_core::goal::GoalStatus::InProgress)
    );
    assert_eq!(goal.created_at, created);
}

#[test]
fn test_progress_month_column_becomes_month_key() {
    let now = Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap();
    let model = progress_entries::Model {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        goal_id: Uuid::nil(),
        month: date(2026, 2, 1),
        planned_amount: 3_000_000,
        actual_amount: 2_500_000,
        notes: String::new(),
        created_at: now.into(),
        updated_at: now.into(),
    };

    let entry: arta_core::goal::ProgressEntry = model.into();
    assert_eq!(entry.month.to_string(), "2026-02");
    assert_eq!(entry.planned_amount.rupiah(), 3_000_000);
    assert_eq!(entry.actual_amount.rupiah(), 2_500_000);
}

#[test]
fn test_enum_mappings_roundtrip() {
    for kind in TransactionKind::iter() {
        let core: arta_core::transaction::TransactionKind = kind.into();
        assert_eq!(TransactionKind::from(core), kind);
    }
    for category in TransactionCategory::iter() {
        let core: arta_core::transaction::Category = category.into();
        assert_eq!(TransactionCategory::from(core), category);
    }
    for category in GoalCategory::iter() {
        let core: arta_core::goal::GoalCategory = category.into();
        assert_eq!(GoalCategory::from(core), category);
    }
    for priority in GoalPriority::iter() {
        let core: arta_core::goal::GoalPriority = priority.into();
        assert_eq!(GoalPriority::from(core), priority);
    }
    for status in GoalStatus::iter() {
        let core: arta_core::goal::GoalStatus = status.into();
        assert_eq!(GoalStatus::from(core), status);
    }
    for category in InvestmentCategory::iter() {
        let core: arta_core::portfolio::InvestmentCategory = category.into();
        assert_eq!(InvestmentCategory::from(core), category);
    }
}

proptest! {
    /// Stored whole-rupiah amounts survive the conversion exactly.
    #[test]
    fn prop_transaction_amount_is_preserved(amount in 1i64..1_000_000_000_000) {
        let now = Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap();
        let model = transactions::Model {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            kind: TransactionKind::Expense,
            amount,
            category: TransactionCategory::Makan,
            notes: String::new(),
            date: date(2026, 2, 14),
            timestamp: now.into(),
            created_at: now.into(),
        };

        let tx: arta_core::transaction::Transaction = model.into();
        prop_assert_eq!(tx.amount.rupiah(), amount);
    }
}
