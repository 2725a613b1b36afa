//! Health check endpoints.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;

/// Health check handler.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
