//! Customer record list route.

use axum::{Json, Router, extract::State, routing::get};

use hekto_core::Record;

use crate::AppState;

/// Creates the customer routes (the session gate is applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", get(get_customers))
}

/// GET /customers
///
/// Returns the full record list in store-native order. Callers must treat
/// the order as unspecified.
async fn get_customers(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.store.fetch_customers().await)
}
