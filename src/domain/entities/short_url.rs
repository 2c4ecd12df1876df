//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short URL record.
///
/// `short_code` is the public lookup key; `id` exists only for internal
/// ordering and is never exposed. Only `clicks` ever changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_construction() {
        let now = Utc::now();
        let url = ShortUrl {
            id: 1,
            original_url: "https://example.com".to_string(),
            short_code: "abc123".to_string(),
            created_at: now,
            clicks: 0,
        };

        assert_eq!(url.id, 1);
        assert_eq!(url.short_code, "abc123");
        assert_eq!(url.original_url, "https://example.com");
        assert_eq!(url.created_at, now);
        assert_eq!(url.clicks, 0);
    }

    #[test]
    fn test_new_short_url_construction() {
        let new_url = NewShortUrl {
            original_url: "https://rust-lang.org".to_string(),
            short_code: "xyz789".to_string(),
        };

        assert_eq!(new_url.short_code, "xyz789");
        assert_eq!(new_url.original_url, "https://rust-lang.org");
    }
}
