//! Chirpy: a small micro-posting web backend.
//!
//! Users register and log in with email + password (Argon2-hashed), get an
//! HS256 JWT back, and post 140-character "chirps" against it. A static
//! fileserver under `/app` feeds an admin hit counter.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use tower_http::services::ServeDir;

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let fileserver = axum::Router::new()
        .nest_service("/app", ServeDir::new("."))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::metrics::track_fileserver_hits,
        ));

    let api = axum::Router::new()
        .route("/api/healthz", get(handlers::http::healthz))
        .route("/api/users", post(auth::create_user))
        .route("/api/login", post(auth::login))
        .route(
            "/api/chirps",
            post(handlers::chirps::create_chirp).get(handlers::chirps::list_chirps),
        )
        .route("/api/chirps/:chirp_id", get(handlers::chirps::get_chirp))
        .route("/admin/metrics", get(handlers::admin::metrics))
        .route("/admin/reset", post(handlers::admin::reset));

    fileserver.merge(api).with_state(state)
}
