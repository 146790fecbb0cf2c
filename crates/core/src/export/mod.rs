//! Sectioned CSV export of all user data.
//!
//! Produces one CSV document with TRANSACTIONS, INVESTMENTS, GOALS,
//! GOAL PROGRESS, and SUMMARY sections, prefixed with a UTF-8 BOM so
//! spreadsheet applications pick up the encoding.

use std::collections::HashMap;

use arta_shared::types::{GoalId, Money};
use chrono::NaiveDate;
use csv::WriterBuilder;
use thiserror::Error;

use crate::goal::progress::calculate_goal_progress;
use crate::goal::status::resolve_status;
use crate::goal::types::{Goal, ProgressEntry};
use crate::portfolio::types::Investment;
use crate::transaction::types::{Transaction, TransactionKind};

/// CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record failed to serialize.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// The output buffer could not be finalized.
    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

/// Renders all user data as one sectioned CSV document.
///
/// Goal statuses are derived from the progress entries at `today`, the
/// same resolution the dashboard shows.
pub fn export_csv(
    transactions: &[Transaction],
    investments: &[Investment],
    goals: &[Goal],
    entries: &[ProgressEntry],
    today: NaiveDate,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record(["TRANSACTIONS"])?;
    writer.write_record(["Date", "Type", "Amount (IDR)", "Category", "Notes"])?;
    for tx in transactions {
        writer.write_record([
            tx.date.to_string(),
            tx.kind.to_string(),
            tx.amount.rupiah().to_string(),
            tx.category.to_string(),
            tx.notes.clone(),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record(["INVESTMENTS"])?;
    writer.write_record([
        "Name",
        "Category",
        "Monthly Contribution (IDR)",
        "Current Value (IDR)",
        "Purchase Date",
        "Notes",
    ])?;
    for investment in investments {
        writer.write_record([
            investment.name.clone(),
            investment.category.to_string(),
            investment.monthly_contribution.rupiah().to_string(),
            investment.current_value.rupiah().to_string(),
            investment.purchase_date.to_string(),
            investment.notes.clone(),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record(["GOALS"])?;
    writer.write_record([
        "Name",
        "Category",
        "Target Amount",
        "Deadline",
        "Priority",
        "Status",
        "Funding Notes",
    ])?;
    for goal in goals {
        let progress = calculate_goal_progress(goal, entries, today);
        let status = resolve_status(goal, progress.total_saved, today);
        writer.write_record([
            goal.name.clone(),
            goal.category.to_string(),
            goal.target_amount.rupiah().to_string(),
            goal.deadline.to_string(),
            goal.priority.to_string(),
            status.to_string(),
            goal.funding_notes.clone(),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record(["GOAL PROGRESS"])?;
    writer.write_record(["Goal Name", "Month", "Planned Amount", "Actual Amount", "Notes"])?;
    let goal_names: HashMap<GoalId, &str> = goals
        .iter()
        .map(|goal| (goal.id, goal.name.as_str()))
        .collect();
    for entry in entries {
        let goal_name = goal_names.get(&entry.goal_id).copied().unwrap_or("Unknown Goal");
        writer.write_record([
            goal_name.to_string(),
            entry.month.to_string(),
            entry.planned_amount.rupiah().to_string(),
            entry.actual_amount.rupiah().to_string(),
            entry.notes.clone(),
        ])?;
    }
    writer.write_record([""])?;

    let total_expenses = Money::sum(
        transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Expense)
            .map(|tx| tx.amount),
    );
    let total_income = Money::sum(
        transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Income)
            .map(|tx| tx.amount),
    );
    let total_investments = Money::sum(investments.iter().map(|inv| inv.current_value));
    let total_goal_targets = Money::sum(goals.iter().map(|goal| goal.target_amount));

    writer.write_record(["SUMMARY"])?;
    writer.write_record(["Total Expenses", &total_expenses.to_string()])?;
    writer.write_record(["Total Income", &total_income.to_string()])?;
    writer.write_record(["Total Investments", &total_investments.to_string()])?;
    writer.write_record(["Total Goal Targets", &total_goal_targets.to_string()])?;

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|err| ExportError::Buffer(err.to_string()))?;

    // BOM keeps Indonesian characters intact when opened in spreadsheets.
    Ok(format!("\u{feff}{body}"))
}
