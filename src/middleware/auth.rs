//! JWT bearer auth for protected routes.

use axum::http::header::AUTHORIZATION;
use uuid::Uuid;

use crate::auth::{extract_bearer, validate_token};
use crate::error::AppError;
use crate::handlers::http::AppState;

/// Extractor: authenticated user ID from the `Authorization: Bearer` header.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub Uuid);

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let token = extract_bearer(header)?;
        let user_id = validate_token(token, state.jwt_secret())?;
        Ok(AuthUser(user_id))
    }
}
