//! Short code generation and validation utilities.
//!
//! Code generation is pure and stateless: OS-grade entropy in, fixed-length
//! URL-safe string out. Uniqueness is not this module's concern; the store's
//! unique constraint arbitrates collisions.

use crate::error::AppError;

/// Length of every short code, in characters.
pub const CODE_LENGTH: usize = 6;

/// URL-safe 64-symbol alphabet. 256 % 64 == 0, so masking a random byte to
/// 6 bits keeps the distribution uniform.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and maps each byte onto the URL-safe
/// alphabet, producing a [`CODE_LENGTH`]-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

/// Validates that a caller-supplied code has exactly [`CODE_LENGTH`] characters.
///
/// Cheap rejection applied before any store round-trip.
///
/// # Errors
///
/// Returns [`AppError::Validation`] on any other length.
pub fn validate_code_length(code: &str) -> Result<(), AppError> {
    if code.len() != CODE_LENGTH {
        return Err(AppError::bad_request(format!(
            "invalid short code length. The short code must be exactly {} characters long.",
            CODE_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in code '{}'",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 1000 draws from a 64^6 space collide with negligible probability.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_exact_length() {
        assert!(validate_code_length("abc123").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_code_length("abc12");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("exactly 6 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_code_length("abc1234").is_err());
    }

    #[test]
    fn test_validate_empty() {
        assert!(validate_code_length("").is_err());
    }
}
