//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "id": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": "3fa9c1",
///   "short": "https://s.example.com/3fa9c1",
///   "original": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `url` is missing or empty
/// - 409 Conflict if the requested `id` is already taken
/// - 500 Internal Server Error if the snapshot write fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let entry = state
        .store
        .create(payload.url.unwrap_or_default(), payload.id)
        .await?;

    let short = state.short_url(&entry.id);

    Ok(Json(ShortenResponse {
        id: entry.id,
        short,
        original: entry.target,
    }))
}
