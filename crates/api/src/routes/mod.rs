//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod dashboard;
pub mod export;
pub mod goals;
pub mod health;
pub mod investments;
pub mod timeline;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(transactions::routes())
        .merge(investments::routes())
        .merge(goals::routes())
        .merge(timeline::routes())
        .merge(dashboard::routes())
        .merge(export::routes())
}
