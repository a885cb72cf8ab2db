//! Admin handlers: hit-counter page and dev-only reset.

use std::sync::atomic::Ordering;

use axum::{extract::State, response::Html, Json};
use tracing::info;

use crate::db;
use crate::error::AppError;
use crate::handlers::http::AppState;

/// GET /admin/metrics — fileserver hit counter as a small HTML page.
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.fileserver_hits.load(Ordering::Relaxed);
    Html(format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {} times!</p></body></html>",
        hits
    ))
}

/// POST /admin/reset — wipe the user table (chirps cascade). Dev platform only.
pub async fn reset(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    if state.platform != "dev" {
        return Err(AppError::Forbidden("Forbidden".to_string()));
    }
    db::reset(state.db()).await?;
    info!("database reset");
    Ok(Json(serde_json::json!({ "ok": true })))
}
