#![allow(dead_code)]

use acorta::AppState;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, TEST_BASE_URL.to_string())
}

pub async fn create_test_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (original_url, short_code, created_at) VALUES (?1, ?2, ?3)")
        .bind(url)
        .bind(code)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_url_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO urls (original_url, short_code, created_at) VALUES (?1, ?2, ?3)")
        .bind(url)
        .bind(code)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows_for_code(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn total_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
