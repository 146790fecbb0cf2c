//! Tests for transaction types and monthly aggregation.

use arta_shared::types::{Money, MonthKey, TransactionId};
use chrono::{NaiveDate, Utc};
use proptest::prelude::*;

use super::error::TransactionError;
use super::summary::{aggregate_by_category, aggregate_by_month, month_summary, today_total};
use super::types::{Category, NewTransaction, Transaction, TransactionKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

fn tx(kind: TransactionKind, category: Category, amount: i64, on: NaiveDate) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        kind,
        amount: Money::new(amount),
        category,
        notes: String::new(),
        date: on,
        timestamp: on.and_hms_opt(12, 0, 0).unwrap().and_utc(),
        created_at: Utc::now(),
    }
}

proptest! {
    /// Monthly expense totals equal the exact integer sum of the month's
    /// expense amounts, however many small amounts are involved.
    #[test]
    fn prop_month_summary_sum_is_exact(amounts in prop::collection::vec(1i64..1_000_000, 0..60)) {
        let day = date(2026, 2, 10);
        let transactions: Vec<Transaction> = amounts
            .iter()
            .map(|&a| tx(TransactionKind::Expense, Category::Makan, a, day))
            .collect();

        let summary = month_summary(&transactions, month(2026, 2));
        let expected: i64 = amounts.iter().sum();
        prop_assert_eq!(summary.total_expenses, Money::new(expected));
        prop_assert_eq!(summary.by_category[&Category::Makan], Money::new(expected));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_aggregate_by_category_zero_fills() {
        let transactions = vec![
            tx(TransactionKind::Expense, Category::Makan, 50_000, date(2026, 2, 1)),
            tx(TransactionKind::Expense, Category::Makan, 25_000, date(2026, 2, 3)),
            tx(TransactionKind::Expense, Category::Rokok, 30_000, date(2026, 2, 3)),
            // Wrong month: excluded.
            tx(TransactionKind::Expense, Category::Makan, 99_000, date(2026, 1, 31)),
            // Income: excluded from category totals.
            tx(TransactionKind::Income, Category::Income, 10_000_000, date(2026, 2, 1)),
        ];

        let totals = aggregate_by_category(&transactions, month(2026, 2));
        assert_eq!(totals[&Category::Makan], Money::new(75_000));
        assert_eq!(totals[&Category::Rokok], Money::new(30_000));
        assert_eq!(totals[&Category::Transportasi], Money::ZERO);
        assert_eq!(totals[&Category::Belanja], Money::ZERO);
        assert_eq!(totals[&Category::Lainnya], Money::ZERO);
        assert!(!totals.contains_key(&Category::Income));
    }

    #[test]
    fn test_aggregate_by_month_recent_first_with_net() {
        let transactions = vec![
            tx(TransactionKind::Income, Category::Income, 10_000_000, date(2026, 1, 25)),
            tx(TransactionKind::Expense, Category::Makan, 2_000_000, date(2026, 1, 10)),
            tx(TransactionKind::Expense, Category::Belanja, 12_000_000, date(2026, 2, 5)),
            tx(TransactionKind::Income, Category::Income, 10_000_000, date(2026, 2, 25)),
            tx(TransactionKind::Expense, Category::Makan, 1_000_000, date(2025, 11, 2)),
        ];

        let totals = aggregate_by_month(&transactions, 2);
        assert_eq!(totals.len(), 2);

        // Newest first.
        assert_eq!(totals[0].month, month(2026, 2));
        assert_eq!(totals[0].net, Money::new(-2_000_000)); // spent over income
        assert_eq!(totals[1].month, month(2026, 1));
        assert_eq!(totals[1].income, Money::new(10_000_000));
        assert_eq!(totals[1].expense, Money::new(2_000_000));
        assert_eq!(totals[1].net, Money::new(8_000_000));
    }

    #[test]
    fn test_aggregate_by_month_empty() {
        assert!(aggregate_by_month(&[], 12).is_empty());
    }

    #[test]
    fn test_today_total_counts_only_todays_expenses() {
        let today = date(2026, 2, 14);
        let transactions = vec![
            tx(TransactionKind::Expense, Category::Makan, 45_000, today),
            tx(TransactionKind::Expense, Category::Transportasi, 20_000, today),
            tx(TransactionKind::Income, Category::Income, 500_000, today),
            tx(TransactionKind::Expense, Category::Makan, 80_000, date(2026, 2, 13)),
        ];

        assert_eq!(today_total(&transactions, today), Money::new(65_000));
    }

    #[test]
    fn test_new_expense_validation() {
        let input = NewTransaction {
            kind: TransactionKind::Expense,
            amount: Money::new(45_000),
            category: Some(Category::Makan),
            notes: "Nasi goreng".to_string(),
            date: None,
        };
        assert_eq!(input.validate(), Ok(Category::Makan));
    }

    #[test]
    fn test_income_defaults_to_income_category() {
        let input = NewTransaction {
            kind: TransactionKind::Income,
            amount: Money::new(10_000_000),
            category: None,
            notes: String::new(),
            date: None,
        };
        assert_eq!(input.validate(), Ok(Category::Income));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let input = NewTransaction {
            kind: TransactionKind::Expense,
            amount: Money::ZERO,
            category: Some(Category::Makan),
            notes: String::new(),
            date: None,
        };
        assert_eq!(input.validate(), Err(TransactionError::NonPositiveAmount));
    }

    #[test]
    fn test_category_kind_mismatch_rejected() {
        let expense_as_income = NewTransaction {
            kind: TransactionKind::Expense,
            amount: Money::new(1000),
            category: Some(Category::Income),
            notes: String::new(),
            date: None,
        };
        assert_eq!(
            expense_as_income.validate(),
            Err(TransactionError::CategoryMismatch {
                kind: TransactionKind::Expense
            })
        );

        let income_as_makan = NewTransaction {
            kind: TransactionKind::Income,
            amount: Money::new(1000),
            category: Some(Category::Makan),
            notes: String::new(),
            date: None,
        };
        assert_eq!(
            income_as_makan.validate(),
            Err(TransactionError::CategoryMismatch {
                kind: TransactionKind::Income
            })
        );
    }

    #[test]
    fn test_long_notes_rejected() {
        let input = NewTransaction {
            kind: TransactionKind::Expense,
            amount: Money::new(1000),
            category: Some(Category::Makan),
            notes: "x".repeat(201),
            date: None,
        };
        assert_eq!(input.validate(), Err(TransactionError::NotesTooLong));
    }
}
