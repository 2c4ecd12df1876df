//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Bare hosts are accepted and get a
    /// `https://` prefix at ingestion.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub code: String,
    pub short_url: String,
}
