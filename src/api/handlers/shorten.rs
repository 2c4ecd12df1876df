//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "code": "abc123",
///   "short_url": "http://localhost:3000/abc123"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or empty.
/// Returns 409 Conflict if every code candidate collided.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state.shortener.shorten(&payload.url).await?;
    let short_url = state
        .shortener
        .short_url(&state.base_url, &record.short_code);

    Ok(Json(ShortenResponse {
        original_url: record.original_url,
        code: record.short_code,
        short_url,
    }))
}
