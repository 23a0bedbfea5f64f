//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use smartpark_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Carries an [`AppError`] across the Axum response boundary.
///
/// Handlers return `Result<_, ApiError>` so the ? operator converts
/// domain errors on the way out.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::CapacityExceeded
            | ErrorKind::InvalidSession
            | ErrorKind::InvalidToken
            | ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Serialization | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %self.0.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: self.0.kind.to_string(),
            message: self.0.message,
        };

        (status, Json(body)).into_response()
    }
}
