//! Auth HTTP handlers: user creation, login.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::{hash_password, issue_token, verify_password, AuthError};
use crate::db::{user_create, user_find_by_email};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::User;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if user_find_by_email(state.db(), &body.email).await?.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let hashed_password = hash_password(&body.password)?;
    let user = user_create(state.db(), &body.email, &hashed_password).await?;

    Ok((StatusCode::CREATED, Json(User::from(user))))
}

/// POST /api/login
///
/// A missing user and a wrong password answer identically.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = user_find_by_email(state.db(), &body.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    verify_password(&body.password, &user.hashed_password)?;

    let token = issue_token(user.id, state.jwt_secret(), state.token_ttl())?;

    Ok(Json(LoginResponse {
        user: User::from(user),
        token,
    }))
}
