use serde::Deserialize;

/// Request body for `POST /api/v1/shorten`.
///
/// A missing `url` field deserializes to an empty string and is rejected by
/// the service's presence check, keeping the "missing url" error in one place.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_url() {
        let req: ShortenRequest = serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(req.url, "https://example.com");
    }

    #[test]
    fn test_deserialize_missing_url_defaults_to_empty() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_empty());
    }
}
