//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::AuthError;

/// Hash a plaintext password into a PHC-format string.
///
/// Empty input is rejected before the primitive runs. Each call draws a
/// fresh salt from `OsRng`, so repeated calls with the same password yield
/// different strings that all verify. Cost parameters are the argon2
/// crate defaults (Argon2id), fixed at compile time.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Internal(format!("hash: {}", e)))?
        .to_string();
    Ok(hash)
}

/// Verify a plaintext candidate against a stored hash.
///
/// A malformed or foreign-format hash counts as a mismatch, not an
/// internal error.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).is_ok());
    }

    #[test]
    fn wrong_password_rejected() {
        let hash = hash_password("mypassword").unwrap();
        assert_eq!(
            verify_password("not my password", &hash),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn empty_password_rejected_before_hashing() {
        assert_eq!(hash_password(""), Err(AuthError::EmptyPassword));
    }

    #[test]
    fn salts_are_fresh_per_call() {
        let first = hash_password("same input").unwrap();
        let second = hash_password("same input").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same input", &first).is_ok());
        assert!(verify_password("same input", &second).is_ok());
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert_eq!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        );
    }
}
