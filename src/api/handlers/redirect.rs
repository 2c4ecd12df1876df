//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The lookup and the click increment happen as one storage operation, so
/// concurrent hits on the same code are all counted.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist; nothing is
/// mutated in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shortener.resolve(&code).await?;

    debug!(code, "Redirecting");

    Ok(Redirect::temporary(&original_url))
}
