//! DTOs for mapping creation and deletion endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a mapping.
///
/// An empty or missing `alias` asks the service to generate one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMappingRequest {
    /// Target URL (must be absolute, with a scheme).
    #[validate(length(min = 1, message = "URL is required"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[serde(default)]
    #[validate(length(max = 64, message = "Alias is too long"))]
    pub alias: Option<String>,
}

/// Success payload shared by the create and delete endpoints.
#[derive(Debug, Serialize)]
pub struct AliasResponse {
    pub status: &'static str,
    pub alias: String,
}

impl AliasResponse {
    pub fn ok(alias: String) -> Self {
        Self { status: "OK", alias }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_alias_deserializes() {
        let req: CreateMappingRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();

        assert_eq!(req.url, "https://example.com");
        assert!(req.alias.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_with_invalid_url_fails_validation() {
        let req: CreateMappingRequest =
            serde_json::from_str(r#"{"url": "invalid_url", "alias": "x"}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_alias_response_shape() {
        let body = serde_json::to_value(AliasResponse::ok("ex1".to_string())).unwrap();

        assert_eq!(body["status"], "OK");
        assert_eq!(body["alias"], "ex1");
    }
}
