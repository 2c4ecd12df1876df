//! Database-backed repository implementations.

mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
