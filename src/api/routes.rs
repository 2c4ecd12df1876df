//! API route configuration.

use crate::api::handlers::{delete_url_handler, shorten_handler, url_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create a shortened URL
/// - `GET    /urls`          - List recent URLs (newest first, max 100)
/// - `DELETE /urls/{code}`   - Delete a URL by its short code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(url_list_handler))
        .route("/urls/{code}", delete(delete_url_handler))
}
