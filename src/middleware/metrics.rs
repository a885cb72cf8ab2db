//! Fileserver hit counter middleware.

use std::sync::atomic::Ordering;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::handlers::http::AppState;

/// Count every request that reaches the static fileserver. The counter
/// lives on [`AppState`], read back by the admin metrics page.
pub async fn track_fileserver_hits(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.fileserver_hits.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}
