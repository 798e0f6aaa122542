//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with the target URL in `Location`.
///
/// # Errors
///
/// Returns 404 `url_not_found` if the alias has no mapping, and 500
/// `internal_error` if the stored URL cannot be sent as a header.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state
        .mapping_service
        .lookup(&alias)
        .await
        .map_err(|e| match e {
            AppError::AliasNotFound => AppError::UrlNotFound,
            other => other,
        })?;

    let location = HeaderValue::try_from(target_url.as_str()).map_err(|_| {
        tracing::error!(alias = %alias, "Stored target URL is not a valid header value");
        AppError::InvalidStoredUrl
    })?;

    tracing::debug!(alias = %alias, target_url = %target_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::state_with;
    use crate::domain::repositories::MockMappingRepository;
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    fn server(repo: MockMappingRepository) -> TestServer {
        let app = Router::new()
            .route("/{alias}", get(redirect_handler))
            .with_state(state_with(repo));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_redirect_found() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_target_url()
            .withf(|alias| alias == "ex1")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let response = server(repo).get("/ex1").await;

        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), "https://example.com");
    }

    #[tokio::test]
    async fn test_redirect_missing_alias_is_url_not_found() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_target_url()
            .times(1)
            .returning(|_| Err(AppError::AliasNotFound));

        let response = server(repo).get("/missing").await;

        response.assert_status_not_found();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "url_not_found");
        assert_eq!(body["error"]["message"], "URL not found");
    }

    #[tokio::test]
    async fn test_redirect_unsendable_url_is_internal_error() {
        let mut repo = MockMappingRepository::new();
        repo.expect_find_target_url()
            .times(1)
            .returning(|_| Ok("https://example.com/a\nb".to_string()));

        let response = server(repo).get("/broken").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.maybe_header("location").is_none());
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "internal error");
    }
}
