//! Session gate for protected data routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use hekto_shared::AppError;

use crate::AppState;
use crate::error::ApiError;

/// Rejects dashboard data requests while the admin session is logged out.
///
/// The gate checks the one in-memory session; there is no token to parse and
/// no per-user lookup. The lock is released before the request proceeds so a
/// slow downstream fetch never holds up the shell.
pub async fn session_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let logged_in = state.shell.read().await.is_logged_in();

    if logged_in {
        next.run(request).await
    } else {
        ApiError(AppError::Unauthorized(
            "Log in to access dashboard data".to_string(),
        ))
        .into_response()
    }
}
