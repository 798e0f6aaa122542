//! Application error taxonomy and its HTTP encoding.
//!
//! Every layer returns [`AppError`]. Storage failures are translated into the
//! typed variants at the repository boundary; whatever cannot be classified
//! ends up in [`AppError::Database`] and is rendered as an opaque 500.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    #[error("URL already exists")]
    UrlExists,

    #[error("alias already exists")]
    AliasExists,

    #[error("alias not found")]
    AliasNotFound,

    #[error("URL not found")]
    UrlNotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("failed to generate a free alias after {attempts} attempts")]
    AliasGenerationExhausted { attempts: usize },

    #[error("stored target URL cannot be used as a Location header")]
    InvalidStoredUrl,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    /// Stable identifier of the error kind, used as `error.code` in responses.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "invalid_input",
            AppError::UrlExists => "url_exists",
            AppError::AliasExists => "alias_exists",
            AppError::AliasNotFound => "alias_not_found",
            AppError::UrlNotFound => "url_not_found",
            AppError::Unauthorized => "unauthorized",
            AppError::AliasGenerationExhausted { .. }
            | AppError::InvalidStoredUrl
            | AppError::Timeout(_)
            | AppError::Database(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::UrlExists | AppError::AliasExists => StatusCode::CONFLICT,
            AppError::AliasNotFound | AppError::UrlNotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::AliasGenerationExhausted { .. }
            | AppError::InvalidStoredUrl
            | AppError::Timeout(_)
            | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for server-side faults that must not leak details.
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Builds the client-facing payload.
    ///
    /// Internal errors collapse to a fixed message; the cause is only logged.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidInput { message, details } => ErrorInfo {
                code: self.code(),
                message: message.clone(),
                details: details.clone(),
            },
            _ if self.is_internal() => ErrorInfo {
                code: self.code(),
                message: "internal error".to_string(),
                details: Value::Null,
            },
            _ => ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details: Value::Null,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        if matches!(self, AppError::Unauthorized) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"alias-shortener\""),
            );
        }

        response
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        AppError::invalid_input(
            "Request validation failed",
            json!({ "fields": fields, "reason": errors.to_string() }),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_input(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
