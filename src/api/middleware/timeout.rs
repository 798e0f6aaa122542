//! Per-request deadline middleware.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Fails the request with [`AppError::Timeout`] once `deadline` elapses.
///
/// The inner handler future is dropped at the deadline, so an unfinished
/// database call is abandoned rather than awaited.
///
/// # Example
///
/// ```rust,ignore
/// let app = router.layer(middleware::from_fn_with_state(
///     Duration::from_secs(4),
///     timeout::layer,
/// ));
/// ```
pub async fn layer(
    State(deadline): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tokio::time::timeout(deadline, next.run(req))
        .await
        .map_err(|_| {
            tracing::warn!(%method, %uri, ?deadline, "Request timed out");
            AppError::Timeout(deadline)
        })
}
