//! API error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors returned by API handlers.
///
/// Rendered as `{"detail": "<message>"}` with a matching status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request body or query failed validation.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub(crate) fn playlist_not_found(id: u64) -> Self {
        Self::NotFound(format!("Playlist with ID {id} not found"))
    }

    pub(crate) fn category_not_found(name: &str) -> Self {
        Self::NotFound(format!("Category '{name}' not found"))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Result alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
