//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// Concrete shortener service used by the HTTP layer.
pub type Shortener = ShortenerService<SqliteUrlRepository, RandomCodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub base_url: String,
    pub shortener: Arc<Shortener>,
}

impl AppState {
    /// Builds application state from a connection pool and public base URL.
    pub fn new(db: SqlitePool, base_url: String) -> Self {
        let repository = Arc::new(SqliteUrlRepository::new(Arc::new(db.clone())));
        let shortener = Arc::new(ShortenerService::new(repository, RandomCodeGenerator));

        Self {
            db,
            base_url,
            shortener,
        }
    }
}
