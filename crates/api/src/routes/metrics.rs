//! Dashboard metrics route.

use axum::{Json, Router, extract::State, routing::get};

use hekto_core::{MetricsSnapshot, aggregate};

use crate::AppState;

/// Creates the metrics routes (the session gate is applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(get_metrics))
}

/// GET /metrics
///
/// Recomputes the snapshot from a fresh store fetch on every call; nothing
/// is cached between requests. A failed fetch degrades to the all-zero
/// snapshot rather than an error.
async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let records = state.store.fetch_customers().await;
    Json(aggregate(&records))
}
