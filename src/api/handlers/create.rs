//! Handler for mapping creation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::mapping::{AliasResponse, CreateMappingRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from an alias to a URL.
///
/// # Endpoint
///
/// `POST /url` (Basic auth)
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "ex1"   // optional, generated when empty or missing
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// - 400 `invalid_input` for a malformed body, URL or alias
/// - 409 `url_exists` / `alias_exists` on conflicts
/// - 500 `internal_error` on storage failure or alias generation exhaustion
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMappingRequest>, JsonRejection>,
) -> Result<Json<AliasResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state
        .mapping_service
        .create(payload.url, payload.alias)
        .await?;

    Ok(Json(AliasResponse::ok(mapping.alias)))
}
