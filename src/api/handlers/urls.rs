//! Handlers for listing and deleting shortened URLs.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::api::dto::url_list::UrlListItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// Returns at most 100 entries ordered by creation time descending. The
/// `short` field is the full public URL; `code` is the bare short code.
pub async fn url_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlListItem>>, AppError> {
    let records = state.shortener.list_recent().await?;

    let items = records
        .into_iter()
        .map(|record| UrlListItem::from_record(record, &state.base_url))
        .collect();

    Ok(Json(items))
}

/// Deletes a shortened URL by its code.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist. Deleting an
/// already-deleted code yields the same 404, never a fault.
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    state.shortener.remove(&code).await?;

    Ok(Json(json!({ "message": "URL deleted" })))
}
