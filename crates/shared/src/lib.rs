//! Shared types, errors, and configuration for Arta.
//!
//! This crate provides common types used across all other crates:
//! - Integer money type for whole-rupiah amounts
//! - Year-month keys for monthly bucketing
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
