//! Short URL allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Maximum insert attempts before a collision is escalated to the caller.
///
/// The generator may produce duplicates; the UNIQUE constraint rejects them
/// and the service draws a fresh candidate. A bounded loop rather than a
/// single retry, since one retry does not stay safe as the table grows.
const MAX_ALLOC_ATTEMPTS: usize = 5;

/// Maximum number of records returned by a listing.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Service for allocating short codes and resolving them back to URLs.
///
/// Owns URL normalization and the collision-retry loop. Uniqueness and
/// increment atomicity are delegated to the repository.
pub struct ShortenerService<R: UrlRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: G,
}

impl<R: UrlRepository, G: CodeGenerator> ShortenerService<R, G> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Shortens a submitted URL.
    ///
    /// Trims the input, prefixes `https://` when no scheme is present, then
    /// draws candidate codes until the insert succeeds or the attempt bound
    /// is hit. A rejected candidate leaves no row behind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty after trimming.
    /// Returns [`AppError::Conflict`] if every candidate collided.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortUrl, AppError> {
        let original_url = normalize_url(raw_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

        for attempt in 1..=MAX_ALLOC_ATTEMPTS {
            let code = self.generator.generate();

            match self
                .repository
                .insert(NewShortUrl {
                    original_url: original_url.clone(),
                    short_code: code,
                })
                .await
            {
                Ok(record) => {
                    metrics::counter!("acorta_urls_created_total").increment(1);
                    return Ok(record);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Short code collision, drawing a new candidate");
                    metrics::counter!("acorta_code_collisions_total").increment(1);
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::conflict(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_ALLOC_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its original URL, counting the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.repository.resolve(code).await? {
            Some(url) => {
                metrics::counter!("acorta_redirects_total").increment(1);
                Ok(url)
            }
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    /// Returns the most recently created records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn list_recent(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list(MAX_LIST_LIMIT).await
    }

    /// Removes a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist (including
    /// when it was already removed).
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn remove(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            metrics::counter!("acorta_urls_deleted_total").increment(1);
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Constructs the full public short URL from a base URL and code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
