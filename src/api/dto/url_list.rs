//! DTOs for the URL listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// One entry in the recent URLs listing.
#[derive(Debug, Serialize)]
pub struct UrlListItem {
    pub original: String,
    pub short: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlListItem {
    /// Builds a listing entry, prefixing the code with the public base URL.
    pub fn from_record(record: ShortUrl, base_url: &str) -> Self {
        Self {
            short: format!("{}/{}", base_url.trim_end_matches('/'), record.short_code),
            original: record.original_url,
            code: record.short_code,
            created_at: record.created_at,
            clicks: record.clicks,
        }
    }
}
