//! `SeaORM` entity definitions.

pub mod goals;
pub mod investments;
pub mod progress_entries;
pub mod sea_orm_active_enums;
pub mod transactions;

#[cfg(test)]
#[path = "conversion_tests.rs"]
mod tests;
