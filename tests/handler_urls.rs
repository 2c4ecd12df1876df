mod common;

use acorta::api::handlers::{delete_url_handler, redirect_handler, url_list_handler};
use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;

fn app(pool: SqlitePool) -> Router {
    let state = common::create_test_state(pool);
    Router::new()
        .route("/api/urls", get(url_list_handler))
        .route("/api/urls/{code}", delete(delete_url_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_list_orders_newest_first(pool: SqlitePool) {
    let base = Utc::now();
    common::create_test_url_at(&pool, "old001", "https://one.example", base - Duration::hours(2))
        .await;
    common::create_test_url_at(&pool, "mid001", "https://two.example", base - Duration::hours(1))
        .await;
    common::create_test_url_at(&pool, "new001", "https://three.example", base).await;

    let server = TestServer::new(app(pool)).unwrap();
    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();

    let codes: Vec<&str> = items.iter().map(|i| i["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["new001", "mid001", "old001"]);
}

#[sqlx::test]
async fn test_list_entry_shape(pool: SqlitePool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let server = TestServer::new(app(pool)).unwrap();
    let response = server.get("/api/urls").await;

    let body = response.json::<serde_json::Value>();
    let entry = &body.as_array().unwrap()[0];

    assert_eq!(entry["original"], "https://example.com");
    assert_eq!(
        entry["short"],
        format!("{}/abc123", common::TEST_BASE_URL)
    );
    assert_eq!(entry["clicks"], 0);
    assert!(entry["created_at"].is_string());
}

#[sqlx::test]
async fn test_list_is_capped_at_100(pool: SqlitePool) {
    for i in 0..105 {
        common::create_test_url(&pool, &format!("cap{i:03}"), "https://example.com").await;
    }

    let server = TestServer::new(app(pool)).unwrap();
    let response = server.get("/api/urls").await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 100);
}

#[sqlx::test]
async fn test_list_is_read_only(pool: SqlitePool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let server = TestServer::new(app(pool.clone())).unwrap();
    server.get("/api/urls").await;

    assert_eq!(common::get_clicks(&pool, "abc123").await, 0);
}

#[sqlx::test]
async fn test_delete_existing_url(pool: SqlitePool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let server = TestServer::new(app(pool.clone())).unwrap();
    let response = server.delete("/api/urls/abc123").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "URL deleted");

    assert_eq!(common::count_rows_for_code(&pool, "abc123").await, 0);

    // The code no longer resolves.
    let redirect = server.get("/abc123").await;
    redirect.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_is_idempotent_in_effect(pool: SqlitePool) {
    common::create_test_url(&pool, "abc123", "https://example.com").await;

    let server = TestServer::new(app(pool)).unwrap();

    server.delete("/api/urls/abc123").await.assert_status_ok();

    // Already-deleted and never-existing codes both report not-found.
    let second = server.delete("/api/urls/abc123").await;
    second.assert_status_not_found();
    assert_eq!(
        second.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );

    server
        .delete("/api/urls/neverwas")
        .await
        .assert_status_not_found();
}
