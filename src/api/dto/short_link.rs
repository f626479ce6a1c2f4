use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// JSON representation of a short link returned by create and fetch.
#[derive(Debug, Serialize)]
pub struct ShortLinkRecord {
    #[serde(rename = "originalURL")]
    pub original_url: String,
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "shortURL")]
    pub short_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for ShortLinkRecord {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            short_code: link.code,
            short_url: link.short_url,
            created_at: link.created_at,
        }
    }
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
