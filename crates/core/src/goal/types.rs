//! Goal and progress entry data types.

use arta_shared::types::{GoalId, Money, MonthKey, ProgressEntryId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::GoalError;

/// Maximum goal name length.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum funding notes length.
pub const MAX_FUNDING_NOTES_LEN: usize = 500;
/// Maximum progress entry notes length.
pub const MAX_PROGRESS_NOTES_LEN: usize = 200;

/// Category of a savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    /// Wedding fund.
    Pernikahan,
    /// House purchase or down payment.
    Rumah,
    /// Vehicle purchase.
    Kendaraan,
    /// Emergency fund.
    #[serde(rename = "Dana Darurat")]
    DanaDarurat,
    /// Vacation fund.
    Liburan,
    /// Anything else.
    Lainnya,
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pernikahan => write!(f, "Pernikahan"),
            Self::Rumah => write!(f, "Rumah"),
            Self::Kendaraan => write!(f, "Kendaraan"),
            Self::DanaDarurat => write!(f, "Dana Darurat"),
            Self::Liburan => write!(f, "Liburan"),
            Self::Lainnya => write!(f, "Lainnya"),
        }
    }
}

/// Priority of a savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalPriority {
    /// Must hit the deadline.
    High,
    /// Important but flexible.
    Medium,
    /// Nice to have.
    Low,
}

impl std::fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Lifecycle state of a goal.
///
/// Status is derived from deadline and saved amount on every read, never
/// persisted; `status_override` is the only stored status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// No savings recorded yet, deadline in the future.
    Upcoming,
    /// Some savings recorded, deadline in the future.
    InProgress,
    /// Saved amount reached the target.
    Completed,
    /// Deadline passed before the target was reached.
    Overdue,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// A savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier.
    pub id: GoalId,
    /// Goal name, unique per user.
    pub name: String,
    /// Goal category.
    pub category: GoalCategory,
    /// Target amount to save.
    pub target_amount: Money,
    /// Date by which the target should be reached.
    pub deadline: NaiveDate,
    /// Priority.
    pub priority: GoalPriority,
    /// Manually-set status that bypasses derivation when present.
    pub status_override: Option<GoalStatus>,
    /// Free-text notes on how the goal will be funded.
    pub funding_notes: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// One goal's planned vs. actual savings for one calendar month.
///
/// At most one entry exists per (user, goal, month); storage upserts on
/// that key, replacing planned/actual/notes wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Unique identifier.
    pub id: ProgressEntryId,
    /// Owning goal.
    pub goal_id: GoalId,
    /// The calendar month this entry covers.
    pub month: MonthKey,
    /// Amount the user planned to save this month.
    pub planned_amount: Money,
    /// Amount actually saved this month.
    pub actual_amount: Money,
    /// Free-text notes.
    pub notes: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGoal {
    /// Goal name.
    pub name: String,
    /// Goal category.
    pub category: GoalCategory,
    /// Target amount to save.
    pub target_amount: Money,
    /// Date by which the target should be reached.
    pub deadline: NaiveDate,
    /// Priority.
    pub priority: GoalPriority,
    /// Free-text funding notes.
    #[serde(default)]
    pub funding_notes: String,
}

impl NewGoal {
    /// Validates the input against creation rules.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NameLength` if the name is empty or over 100
    /// characters, `GoalError::NonPositiveTarget` if the target amount is
    /// not positive, `GoalError::DeadlineNotFuture` if the deadline is not
    /// strictly after `today`, and `GoalError::FundingNotesTooLong` if the
    /// notes exceed 500 characters.
    pub fn validate(&self, today: NaiveDate) -> Result<(), GoalError> {
        let name_chars = self.name.chars().count();
        if name_chars == 0 || name_chars > MAX_NAME_LEN {
            return Err(GoalError::NameLength);
        }
        if self.target_amount <= Money::ZERO {
            return Err(GoalError::NonPositiveTarget);
        }
        if self.deadline <= today {
            return Err(GoalError::DeadlineNotFuture(self.deadline));
        }
        if self.funding_notes.chars().count() > MAX_FUNDING_NOTES_LEN {
            return Err(GoalError::FundingNotesTooLong);
        }
        Ok(())
    }
}

/// Input for upserting one month's progress on a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProgressEntry {
    /// Amount the user plans to save this month.
    pub planned_amount: Money,
    /// Amount actually saved this month.
    pub actual_amount: Money,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl NewProgressEntry {
    /// Validates the input against upsert rules.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NegativeAmount` if either amount is negative and
    /// `GoalError::ProgressNotesTooLong` if the notes exceed 200 characters.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.planned_amount.is_negative() || self.actual_amount.is_negative() {
            return Err(GoalError::NegativeAmount);
        }
        if self.notes.chars().count() > MAX_PROGRESS_NOTES_LEN {
            return Err(GoalError::ProgressNotesTooLong);
        }
        Ok(())
    }
}
