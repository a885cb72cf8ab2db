//! Shared application state and the liveness probe.

use std::sync::atomic::AtomicI64;
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Duration;

use crate::db::DbPool;

/// Shared application state for all handlers.
///
/// Cheap to clone: a pool handle, immutable config values, and the
/// fileserver hit counter behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub platform: String,
    pub fileserver_hits: Arc<AtomicI64>,
}

impl AppState {
    pub fn new(db: DbPool, jwt_secret: String, token_ttl_secs: i64, platform: String) -> Self {
        Self {
            db,
            jwt_secret,
            token_ttl: Duration::seconds(token_ttl_secs),
            platform,
            fileserver_hits: Arc::new(AtomicI64::new(0)),
        }
    }

    pub fn db(&self) -> &DbPool {
        &self.db
    }
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

/// GET /api/healthz — liveness probe.
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
