//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its target URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Responds with `302 Found` and the stored target in `Location`. The target
/// is passed through verbatim; the store does not validate URLs.
///
/// # Errors
///
/// - 404 Not Found if the id doesn't exist
/// - 500 Internal Server Error if the stored target cannot be sent as a
///   header value
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.store.resolve(&id).await?;

    let location = HeaderValue::from_str(&target).map_err(|e| {
        tracing::error!("Stored target for {} is not a valid header value: {}", id, e);
        AppError::internal("Stored target cannot be redirected to", json!({ "id": id }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
