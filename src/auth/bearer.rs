//! Bearer token extraction from the `Authorization` header value.

use super::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Shortest token worth handing to signature validation. A plausibility
/// guard against truncated or placeholder values, not a cryptographic
/// boundary: real rejection happens at signature validation.
pub const MIN_TOKEN_LEN: usize = 30;

/// Pull the token out of a raw `Authorization` header value.
///
/// The prefix match is case-sensitive and requires the single space:
/// `BearerXYZ` is malformed, not short.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let raw = header.ok_or(AuthError::MissingHeader)?;
    if raw.is_empty() {
        return Err(AuthError::MissingHeader);
    }
    let token = raw
        .trim()
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedHeader)?
        .trim();
    if token.len() < MIN_TOKEN_LEN {
        return Err(AuthError::TokenTooShort);
    }
    Ok(token)
}
