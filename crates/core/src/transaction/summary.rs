//! Monthly aggregation over transactions.

use std::collections::BTreeMap;

use arta_shared::types::{Money, MonthKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Category, Transaction, TransactionKind};

/// Expense and income totals for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month covered.
    pub month: MonthKey,
    /// Total expenses for the month.
    pub total_expenses: Money,
    /// Total income for the month.
    pub total_income: Money,
    /// Expense totals per spending category, zero-filled.
    pub by_category: BTreeMap<Category, Money>,
}

/// Income, expense, and net totals for one month of the trend view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// The month covered.
    pub month: MonthKey,
    /// Total income.
    pub income: Money,
    /// Total expenses.
    pub expense: Money,
    /// Income minus expenses; may be negative.
    pub net: Money,
}

/// Sums expenses per spending category for one month.
///
/// Every spending category is present in the result, zero when unused.
#[must_use]
pub fn aggregate_by_category(
    transactions: &[Transaction],
    month: MonthKey,
) -> BTreeMap<Category, Money> {
    let mut totals: BTreeMap<Category, Money> = Category::EXPENSE
        .into_iter()
        .map(|category| (category, Money::ZERO))
        .collect();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense || MonthKey::from_date(tx.date) != month {
            continue;
        }
        if let Some(total) = totals.get_mut(&tx.category) {
            *total = total.add(tx.amount);
        }
    }

    totals
}

/// Income/expense/net totals for the most recent `month_count` months that
/// have any transactions, newest first.
#[must_use]
pub fn aggregate_by_month(transactions: &[Transaction], month_count: usize) -> Vec<MonthlyTotals> {
    let mut months: Vec<MonthKey> = transactions
        .iter()
        .map(|tx| MonthKey::from_date(tx.date))
        .collect();
    months.sort_unstable();
    months.dedup();
    months.reverse();
    months.truncate(month_count);

    months
        .into_iter()
        .map(|month| {
            let mut income = Money::ZERO;
            let mut expense = Money::ZERO;
            for tx in transactions {
                if MonthKey::from_date(tx.date) != month {
                    continue;
                }
                match tx.kind {
                    TransactionKind::Income => income = income.add(tx.amount),
                    TransactionKind::Expense => expense = expense.add(tx.amount),
                }
            }
            MonthlyTotals {
                month,
                income,
                expense,
                net: income.subtract(expense),
            }
        })
        .collect()
}

/// Full summary for one month: totals plus the category breakdown.
#[must_use]
pub fn month_summary(transactions: &[Transaction], month: MonthKey) -> MonthSummary {
    let mut total_expenses = Money::ZERO;
    let mut total_income = Money::ZERO;
    for tx in transactions {
        if MonthKey::from_date(tx.date) != month {
            continue;
        }
        match tx.kind {
            TransactionKind::Expense => total_expenses = total_expenses.add(tx.amount),
            TransactionKind::Income => total_income = total_income.add(tx.amount),
        }
    }

    MonthSummary {
        month,
        total_expenses,
        total_income,
        by_category: aggregate_by_category(transactions, month),
    }
}

/// Total spent on the given day.
#[must_use]
pub fn today_total(transactions: &[Transaction], today: NaiveDate) -> Money {
    Money::sum(
        transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Expense && tx.date == today)
            .map(|tx| tx.amount),
    )
}
