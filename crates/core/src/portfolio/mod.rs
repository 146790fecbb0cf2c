//! Investment records and portfolio metrics.

pub mod error;
pub mod metrics;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::InvestmentError;
pub use metrics::portfolio_metrics;
pub use types::{
    CategoryMetrics, Investment, InvestmentCategory, MAX_NAME_LEN, NewInvestment, PortfolioMetrics,
};
