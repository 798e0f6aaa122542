//! API route configuration.
//!
//! Mutating endpoints require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{create_mapping_handler, delete_mapping_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Routes that create or remove mappings.
///
/// # Endpoints
///
/// - `POST   /url`          - Create a mapping
/// - `DELETE /url/{alias}`  - Delete a mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(create_mapping_handler))
        .route("/url/{alias}", delete(delete_mapping_handler))
}
