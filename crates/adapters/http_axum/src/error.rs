//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use berlinclock_domain::error::{BerlinClockError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BerlinClockError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(BerlinClockError);

impl From<BerlinClockError> for ApiError {
    fn from(err: BerlinClockError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BerlinClockError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BerlinClockError::Decode(err) => {
                tracing::debug!(error = %err, "decode failed");
                (StatusCode::BAD_REQUEST, "decode failed".to_string())
            }
            BerlinClockError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
