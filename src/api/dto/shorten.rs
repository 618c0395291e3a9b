//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to redirect to. Stored verbatim; only presence is checked.
    #[validate(required(message = "url is required"))]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: Option<String>,

    /// Optional caller-chosen id (otherwise one is generated).
    pub id: Option<String>,
}

/// A created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
    /// Full public short link (`{base_url}/{id}`).
    pub short: String,
    /// The target URL as stored.
    pub original: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str(r#"{ "id": "abc" }"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_empty_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str(r#"{ "url": "" }"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_any_non_empty_url_is_accepted() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{ "url": "not even a url" }"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.id.is_none());
    }
}
