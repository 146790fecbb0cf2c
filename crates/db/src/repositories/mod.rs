//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every method takes the owning [`arta_shared::types::UserId`] and filters
//! by it; callers never observe cross-user data.

pub mod goal;
pub mod investment;
pub mod progress;
pub mod transaction;

pub use goal::{CreateGoalInput, GoalError, GoalRepository, UpdateGoalInput};
pub use investment::{
    CreateInvestmentInput, InvestmentError, InvestmentRepository, UpdateInvestmentInput,
};
pub use progress::{ProgressError, ProgressRepository, UpsertProgressInput};
pub use transaction::{
    CreateTransactionInput, TransactionError, TransactionRepository, UpdateTransactionInput,
};
