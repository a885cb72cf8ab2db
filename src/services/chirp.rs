//! Chirp body rules: length limit and word blocklist.

use crate::error::{AppError, AppResult};

pub const MAX_CHIRP_LEN: usize = 140;

const BLOCKLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const REPLACEMENT: &str = "****";

/// Validate and clean a chirp body: enforce the length cap, then mask
/// blocklisted words.
pub fn clean_chirp_body(body: &str) -> AppResult<String> {
    if body.chars().count() > MAX_CHIRP_LEN {
        return Err(AppError::Validation("Chirp is too long".to_string()));
    }
    Ok(filter_blocklist(body))
}

/// Replace exact blocklisted words (case-insensitive) with `****`.
/// Words split on single spaces; punctuation-adjacent matches pass through.
fn filter_blocklist(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if BLOCKLIST.contains(&word.to_lowercase().as_str()) {
                REPLACEMENT
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_words_masked() {
        assert_eq!(
            clean_chirp_body("This is a kerfuffle opinion I need to share with the world")
                .unwrap(),
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn masking_is_case_insensitive() {
        assert_eq!(
            clean_chirp_body("Sharbert I hear you").unwrap(),
            "**** I hear you"
        );
    }

    #[test]
    fn punctuation_defeats_the_filter() {
        assert_eq!(
            clean_chirp_body("I really need a kerfuffle! to go to bed sooner").unwrap(),
            "I really need a kerfuffle! to go to bed sooner"
        );
    }

    #[test]
    fn over_limit_rejected() {
        let body = "a".repeat(MAX_CHIRP_LEN + 1);
        assert!(clean_chirp_body(&body).is_err());
    }

    #[test]
    fn at_limit_accepted() {
        let body = "a".repeat(MAX_CHIRP_LEN);
        assert_eq!(clean_chirp_body(&body).unwrap(), body);
    }
}
