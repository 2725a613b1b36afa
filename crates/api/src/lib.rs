//! HTTP layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The rendered admin pages (login, navigation shell, views)
//! - JSON API routes under `/api/v1`
//! - The session-gate middleware protecting dashboard data

pub mod error;
pub mod middleware;
pub mod pages;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hekto_core::Shell;
use hekto_store::StoreClient;

/// Thread-safe handle to the single in-memory shell.
pub type ShellHandle = Arc<RwLock<Shell>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Session gate and active-section state.
    pub shell: ShellHandle,
    /// Document-store query client.
    pub store: Arc<StoreClient>,
}

impl AppState {
    /// Assembles the application state from its parts.
    #[must_use]
    pub fn new(shell: Shell, store: StoreClient) -> Self {
        Self {
            shell: Arc::new(RwLock::new(shell)),
            store: Arc::new(store),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes())
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
