//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod clients;
pub mod health;
pub mod mortgages;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(clients::routes())
        .merge(mortgages::routes())
}
