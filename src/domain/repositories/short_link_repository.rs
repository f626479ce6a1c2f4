//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt.
///
/// A uniqueness conflict on the code column is an expected outcome of the
/// creation protocol, not an error: the caller discards the candidate code
/// and retries. Any other store failure is a real error.
#[derive(Debug)]
pub enum InsertOutcome {
    /// The row was inserted; the returned record carries the
    /// store-assigned `created_at`.
    Created(ShortLink),
    /// The candidate code is already taken (by a live or deleted row).
    CodeTaken,
}

/// Repository interface for short link storage.
///
/// The store is the sole arbiter of code uniqueness: `insert` relies on the
/// unique constraint rather than a separate existence check, and
/// `soft_delete_by_code` is a single conditional update. Neither operation
/// requires client-side locking to be correct under concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Attempts an atomic insert of a new link with a null `deleted_at`.
    ///
    /// # Returns
    ///
    /// - [`InsertOutcome::Created`] on success
    /// - [`InsertOutcome::CodeTaken`] when the insert was rejected by the
    ///   uniqueness constraint on `code` (and only that constraint)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any other store failure.
    async fn insert(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError>;

    /// Finds the live link with the given code.
    ///
    /// Soft-deleted rows are filtered out at the store level, so a deleted
    /// code is indistinguishable from one that never existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure.
    async fn find_live_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically marks the live link with the given code as deleted.
    ///
    /// A single conditional update (`deleted_at IS NULL` guard) ensures that
    /// of two concurrent deletes, exactly one observes the transition.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` with the updated record if a live row matched
    /// - `Ok(None)` if the code never existed or was already deleted
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure.
    async fn soft_delete_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;
}
