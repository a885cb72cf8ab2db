//! Auth failure taxonomy.

use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the credential hasher, token service, and bearer extraction.
///
/// Variants carry no payload from the request: the plaintext password, the
/// stored hash, and the signing secret never appear in an error value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("empty password")]
    EmptyPassword,

    #[error("password does not match stored hash")]
    InvalidCredentials,

    #[error("token signature or algorithm rejected")]
    InvalidSignature,

    #[error("token expired")]
    TokenExpired,

    #[error("subject claim is not a valid user id")]
    MalformedSubject,

    #[error("authorization header missing or empty")]
    MissingHeader,

    #[error("authorization header is not a Bearer credential")]
    MalformedHeader,

    #[error("bearer token below minimum plausible length")]
    TokenTooShort,

    #[error("auth primitive failure: {0}")]
    Internal(String),
}

impl AuthError {
    /// Status code for the transport response.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::EmptyPassword => StatusCode::BAD_REQUEST,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Body text for the transport response. Generic for every rejection;
    /// the precise variant only reaches the diagnostic log.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::EmptyPassword => "password must not be empty",
            AuthError::Internal(_) => "internal error",
            _ => "unauthorized",
        }
    }
}
