//! JWT issue and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthError;

/// Fixed issuer written into every token this service signs.
const TOKEN_ISSUER: &str = "chirpy";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String, // user id
    pub iat: i64,
    pub exp: i64,
}

/// Mint a signed token binding `user_id` until `ttl` past now.
///
/// Claims: `iss` is the service constant, `sub` the hyphenated user id,
/// `iat`/`exp` epoch seconds (UTC). Signed HS256 with `secret`.
pub fn issue_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("sign: {}", e)))
}

/// Verify a token and recover the user id from its subject.
///
/// The accepted algorithm is pinned to HS256: a token whose header names
/// any other algorithm is rejected regardless of its MAC. Expiry is
/// checked with zero leeway. Pure function, safe under concurrency.
pub fn validate_token(token: &str, secret: &str) -> Result<Uuid, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidSignature,
    })?;
    Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedSubject)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    fn claims_for(sub: String) -> Claims {
        let now = Utc::now();
        Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        }
    }

    #[test]
    fn issue_then_validate_returns_user_id() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET, Duration::hours(1)).unwrap();
        assert_eq!(validate_token(&token, SECRET), Ok(user_id));
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET, Duration::hours(1)).unwrap();
        assert_eq!(
            validate_token(&token, "a different secret"),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn expired_token_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET, Duration::hours(-1)).unwrap();
        assert_eq!(validate_token(&token, SECRET), Err(AuthError::TokenExpired));
    }

    #[test]
    fn tampered_token_rejected() {
        let mut token = issue_token(Uuid::new_v4(), SECRET, Duration::hours(1)).unwrap();
        token.pop();
        assert_eq!(
            validate_token(&token, SECRET),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn foreign_algorithm_rejected() {
        // Same secret, wrong algorithm in the header.
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims_for(Uuid::new_v4().to_string()),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(
            validate_token(&token, SECRET),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn non_uuid_subject_rejected() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims_for("not-a-uuid".to_string()),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(
            validate_token(&token, SECRET),
            Err(AuthError::MalformedSubject)
        );
    }

    #[test]
    fn garbage_token_rejected() {
        assert_eq!(
            validate_token("definitely.not.ajwt", SECRET),
            Err(AuthError::InvalidSignature)
        );
    }
}
