//! Handler for mapping deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::mapping::AliasResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (Basic auth)
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// Returns 404 `alias_not_found` if the alias has no mapping, including
/// when it was already deleted.
pub async fn delete_mapping_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AliasResponse>, AppError> {
    state.mapping_service.delete(&alias).await?;

    Ok(Json(AliasResponse::ok(alias)))
}
