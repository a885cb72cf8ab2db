//! Chirp HTTP handlers: create (authenticated), list, get.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::{chirp_create, chirp_get_by_id, chirps_list_all};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::auth::AuthUser;
use crate::models::Chirp;
use crate::services::chirp::clean_chirp_body;

#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// POST /api/chirps — author is the authenticated user.
pub async fn create_chirp(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), AppError> {
    let body = clean_chirp_body(&req.body)?;
    let chirp = chirp_create(state.db(), &body, user_id).await?;
    Ok((StatusCode::CREATED, Json(Chirp::from(chirp))))
}

/// GET /api/chirps — all chirps, oldest first.
pub async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<Chirp>>, AppError> {
    let rows = chirps_list_all(state.db()).await?;
    Ok(Json(rows.into_iter().map(Chirp::from).collect()))
}

/// GET /api/chirps/:chirp_id
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<Uuid>,
) -> Result<Json<Chirp>, AppError> {
    let chirp = chirp_get_by_id(state.db(), chirp_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chirp not found".to_string()))?;
    Ok(Json(Chirp::from(chirp)))
}
