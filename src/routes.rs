//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect to the target URL (public)
//! - `GET    /health`       - Health check (public)
//! - `POST   /url`          - Create a mapping (Basic auth)
//! - `DELETE /url/{alias}`  - Delete a mapping (Basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline, answered with a JSON `internal_error`
//! - **Authentication** - HTTP Basic on mutating routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, timeout, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the routes with state and authentication applied.
///
/// Transport concerns (timeout, tracing, path normalization) are added by
/// [`app_router`].
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(api_router)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let app = router(state)
        .layer(middleware::from_fn_with_state(request_timeout, timeout::layer))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(app)
}
