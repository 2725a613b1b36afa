//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session::session_gate};

pub mod customers;
pub mod health;
pub mod metrics;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Data routes sit behind the session gate
    let protected_routes = Router::new()
        .merge(metrics::routes())
        .merge(customers::routes())
        .layer(middleware::from_fn_with_state(state, session_gate));

    // Combine public and protected routes
    Router::new().merge(health::routes()).merge(protected_routes)
}
