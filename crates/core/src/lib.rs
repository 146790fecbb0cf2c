//! Core business logic for Arta.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here. Every function operates on collections the caller has already
//! fetched and scoped to one user; nothing here performs I/O, and the
//! reference date is always an explicit parameter.
//!
//! # Modules
//!
//! - `calendar` - Day/month boundaries in the fixed reference timezone
//! - `goal` - Savings goals: progress, status, risk, timeline, KPIs
//! - `transaction` - Expense/income records and monthly summaries
//! - `portfolio` - Investment portfolio metrics
//! - `export` - CSV export of all user data

pub mod calendar;
pub mod export;
pub mod goal;
pub mod portfolio;
pub mod transaction;
