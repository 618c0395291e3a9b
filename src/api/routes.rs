//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link creation routes, mounted at the root.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Service routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /health` - Store status and version
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
