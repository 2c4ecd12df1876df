//! CORS policy for the JSON API.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS middleware applied to `/api/*` routes only.
///
/// Any origin may call the API with GET, POST, DELETE, or OPTIONS and a
/// `Content-Type` header. Redirects and static assets are same-origin and
/// carry no CORS headers.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
