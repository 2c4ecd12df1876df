//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` table.
///
/// All uniqueness guarantees live here, not in the caller: `insert` relies on
/// the storage layer's UNIQUE constraint, and `resolve` performs the lookup
/// and click increment as a single atomic statement so concurrent resolutions
/// never lose an update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Storage`] on other database errors. A failed
    /// insert leaves no partial row behind.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code without touching the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically increments `clicks` and returns the original URL.
    ///
    /// Returns `Ok(None)` when the code does not exist; nothing is mutated
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn resolve(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Lists records ordered by `created_at` descending, ties broken by
    /// insertion order, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Deletes a record by its short code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
