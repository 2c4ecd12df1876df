//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Database row shape for the `urls` table.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<UrlRow> for ShortUrl {
    fn from(row: UrlRow) -> Self {
        ShortUrl {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            clicks: row.clicks,
        }
    }
}

/// SQLite repository for short URL storage and retrieval.
///
/// Uses bound parameters throughout; uniqueness rests on the table's UNIQUE
/// constraint and the click increment is a single UPDATE statement, so no
/// application-level locking is needed.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, clicks)
            VALUES (?1, ?2, ?3, 0)
            RETURNING id, original_url, short_code, created_at, clicks
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        // Lookup and increment in one statement so concurrent resolutions of
        // the same code never lose an update.
        let url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE short_code = ?1
            RETURNING original_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn list(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = ?1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
