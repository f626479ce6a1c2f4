//! Validation of user-supplied original URLs.
//!
//! Checked eagerly at the service boundary, before any store call.

use crate::error::AppError;
use url::Url;

/// Maximum accepted length for an original URL, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Validates an original URL for shortening.
///
/// Rules, checked in order:
///
/// 1. Present and non-empty
/// 2. Syntactically valid absolute URI with scheme and authority
/// 3. At most [`MAX_URL_LENGTH`] characters
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_original_url(input: &str) -> Result<(), AppError> {
    if input.is_empty() {
        return Err(AppError::bad_request(
            "The url field is required. Please provide a valid URL to shorten.",
        ));
    }

    let parsed = Url::parse(input).map_err(|_| {
        AppError::bad_request(
            "The provided URL is not a valid URI format. Please ensure it starts with http:// or https://",
        )
    })?;

    if !parsed.has_host() {
        return Err(AppError::bad_request(
            "The provided URL is not a valid URI format. Please ensure it starts with http:// or https://",
        ));
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(AppError::bad_request(
            "The provided URL exceeds the maximum allowed length of 2048 characters. Please provide a shorter URL.",
        ));
    }

    Ok(())
}
