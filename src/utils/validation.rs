//! Validation of caller-supplied target URLs and aliases.
//!
//! Runs before any storage access so that malformed input never reaches the
//! database.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use url::Url;

/// Upper bound for caller-supplied aliases.
pub const MAX_ALIAS_LENGTH: usize = 64;

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Aliases that would be shadowed by fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Checks that `target_url` is an absolute URL with a scheme.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] for empty, relative or unparsable URLs,
/// and for URLs containing control characters.
pub fn validate_target_url(target_url: &str) -> Result<(), AppError> {
    if target_url.trim().is_empty() {
        return Err(AppError::invalid_input(
            "URL must not be empty",
            json!({ "field": "url" }),
        ));
    }

    // Url::parse strips tab, CR and LF, but the raw string is what gets stored
    // and later sent back as a Location header.
    if target_url.chars().any(char::is_control) {
        return Err(AppError::invalid_input(
            "URL must not contain control characters",
            json!({ "field": "url" }),
        ));
    }

    // Url::parse has no base here, so relative references fail to parse.
    Url::parse(target_url).map_err(|e| {
        AppError::invalid_input(
            "URL must be an absolute URL with a scheme",
            json!({ "field": "url", "reason": e.to_string() }),
        )
    })?;

    Ok(())
}

/// Checks the shape of a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::invalid_input(
            format!("Alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "field": "alias", "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::invalid_input(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "field": "alias", "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::invalid_input(
            "This alias is reserved",
            json!({ "field": "alias", "alias": alias }),
        ));
    }

    Ok(())
}

/// Rejects an empty alias on lookup and delete paths.
pub fn require_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::invalid_input(
            "alias is empty",
            json!({ "field": "alias" }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid_input(result: Result<(), AppError>) -> bool {
        matches!(result, Err(AppError::InvalidInput { .. }))
    }

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1#frag").is_ok());
        assert!(validate_target_url("ftp://files.example.com/a.txt").is_ok());
    }

    #[test]
    fn test_rejects_relative_and_garbage_urls() {
        assert!(is_invalid_input(validate_target_url("not-a-url")));
        assert!(is_invalid_input(validate_target_url("/relative/path")));
        assert!(is_invalid_input(validate_target_url("example.com")));
        assert!(is_invalid_input(validate_target_url("")));
        assert!(is_invalid_input(validate_target_url("   ")));
    }

    #[test]
    fn test_rejects_urls_with_control_characters() {
        assert!(is_invalid_input(validate_target_url("https://example.com/a\nb")));
        assert!(is_invalid_input(validate_target_url("https://example.com/a\r\nb")));
        assert!(is_invalid_input(validate_target_url("https://exa\tmple.com")));
        assert!(is_invalid_input(validate_target_url("https://example.com/\u{7f}")));
    }

    #[test]
    fn test_alias_rules() {
        assert!(validate_alias("ex1").is_ok());
        assert!(validate_alias("My_Link-2024").is_ok());
        assert!(validate_alias(&"a".repeat(MAX_ALIAS_LENGTH)).is_ok());

        assert!(is_invalid_input(validate_alias("")));
        assert!(is_invalid_input(validate_alias(&"a".repeat(MAX_ALIAS_LENGTH + 1))));
        assert!(is_invalid_input(validate_alias("with space")));
        assert!(is_invalid_input(validate_alias("slash/alias")));
        assert!(is_invalid_input(validate_alias("ünïcode")));
    }

    #[test]
    fn test_reserved_aliases_rejected() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                is_invalid_input(validate_alias(reserved)),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_require_alias() {
        assert!(require_alias("x").is_ok());
        assert!(is_invalid_input(require_alias("")));
    }
}
