//! Goal error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Goal-related validation errors.
///
/// The read-side calculations (progress, status, risk, timeline) never
/// error; they clamp. These variants cover goal and progress creation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// Goal name must be 1-100 characters.
    #[error("Goal name must be 1-100 characters")]
    NameLength,

    /// Target amount must be positive.
    #[error("Target amount must be positive")]
    NonPositiveTarget,

    /// Deadline must be strictly in the future.
    #[error("Deadline must be in the future: {0}")]
    DeadlineNotFuture(NaiveDate),

    /// Funding notes exceed the maximum length.
    #[error("Funding notes must be under 500 characters")]
    FundingNotesTooLong,

    /// Progress amounts cannot be negative.
    #[error("Progress amounts cannot be negative")]
    NegativeAmount,

    /// Progress notes exceed the maximum length.
    #[error("Progress notes must be under 200 characters")]
    ProgressNotesTooLong,
}
