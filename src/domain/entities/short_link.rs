//! ShortLink entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// `code`, `original_url`, `short_url` and `created_at` are immutable after
/// creation. `short_url` is composed once at creation time and stored
/// verbatim, so a later base-URL change does not break existing links.
/// The only mutable field is `deleted_at`, which transitions null → timestamp
/// exactly once and is never reversed.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Lifecycle state derived from the persisted nullable `deleted_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Live,
    Deleted(DateTime<Utc>),
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        code: String,
        original_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            original_url,
            short_url,
            created_at,
            deleted_at,
        }
    }

    /// Returns the lifecycle state as a tagged value.
    pub fn state(&self) -> LinkState {
        match self.deleted_at {
            Some(at) => LinkState::Deleted(at),
            None => LinkState::Live,
        }
    }

    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input data for creating a new short link.
///
/// `deleted_at` is implicitly null and `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            "http://sho.rt/abc123".to_string(),
            now,
            None,
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_url, "http://sho.rt/abc123");
        assert_eq!(link.created_at, now);
        assert!(!link.is_deleted());
        assert_eq!(link.state(), LinkState::Live);
    }

    #[test]
    fn test_short_link_deleted_state() {
        let deleted_at = Utc::now();
        let link = ShortLink::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            "http://sho.rt/abc123".to_string(),
            Utc::now(),
            Some(deleted_at),
        );

        assert!(link.is_deleted());
        assert_eq!(link.state(), LinkState::Deleted(deleted_at));
    }

    #[test]
    fn test_new_short_link() {
        let new_link = NewShortLink {
            code: "xyz789".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            short_url: "http://sho.rt/xyz789".to_string(),
        };

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.original_url, "https://rust-lang.org");
        assert_eq!(new_link.short_url, "http://sho.rt/xyz789");
    }
}
