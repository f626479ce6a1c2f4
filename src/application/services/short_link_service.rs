//! Short link creation, lookup, and soft deletion.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, ShortLinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_code_length};
use crate::utils::url_validator::validate_original_url;

/// Maximum insert attempts before giving up on finding a free code.
const MAX_RETRIES: usize = 5;

/// Service implementing the short link lifecycle.
///
/// Creation relies on the store's unique constraint as the arbiter between
/// concurrent writers: a candidate code is inserted optimistically and only a
/// rejection specifically caused by the code constraint triggers a retry with
/// a fresh code. No existence check precedes the insert, so there is no
/// check-then-act race.
pub struct ShortLinkService {
    repository: Arc<dyn ShortLinkRepository>,
    base_url: String,
}

impl ShortLinkService {
    /// Creates a new service.
    ///
    /// `base_url` comes from the startup configuration; a trailing slash is
    /// tolerated and stripped before composing short URLs.
    pub fn new(repository: Arc<dyn ShortLinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            repository,
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// Validation (presence, absolute URI syntax, length) runs before any
    /// store call. Then up to [`MAX_RETRIES`] candidate codes are generated
    /// and inserted; a code collision discards the candidate and retries.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `original_url` fails a precondition
    /// - [`AppError::ExhaustedRetries`] if every attempt collided
    /// - [`AppError::Internal`] on store failure
    pub async fn create_short_link(&self, original_url: &str) -> Result<ShortLink, AppError> {
        validate_original_url(original_url)?;

        for attempt in 0..MAX_RETRIES {
            let code = generate_code();
            let short_url = format!("{}/{}", self.base_url, code);

            let new_link = NewShortLink {
                code: code.clone(),
                original_url: original_url.to_string(),
                short_url,
            };

            match self.repository.insert(new_link).await? {
                InsertOutcome::Created(link) => return Ok(link),
                InsertOutcome::CodeTaken => {
                    tracing::warn!(attempt, %code, "duplicate short code detected, retrying");
                }
            }
        }

        Err(AppError::exhausted_retries(
            "Failed to generate a unique short URL after multiple retries. Please try again later.",
        ))
    }

    /// Resolves a code to its live short link.
    ///
    /// Used identically by the redirect endpoint and the record-fetch
    /// endpoint. A soft-deleted code resolves exactly like one that never
    /// existed.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the code has the wrong length
    /// - [`AppError::NotFound`] if no live link matches
    /// - [`AppError::Internal`] on store failure
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        validate_code_length(code)?;

        self.repository
            .find_live_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "The short URL you requested does not exist, has been deleted, or is invalid. \
                     Please check the short code and try again.",
                )
            })
    }

    /// Soft-deletes the live link with the given code.
    ///
    /// The repository performs a single conditional update, so of two
    /// concurrent deletes exactly one succeeds; the other (like a delete of a
    /// nonexistent code) reports not found.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the code has the wrong length
    /// - [`AppError::NotFound`] if no live link matches
    /// - [`AppError::Internal`] on store failure
    pub async fn soft_delete(&self, code: &str) -> Result<ShortLink, AppError> {
        validate_code_length(code)?;

        self.repository
            .soft_delete_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "The short URL you are trying to delete does not exist or has already been \
                     deleted. Please verify the short code.",
                )
            })
    }
}
