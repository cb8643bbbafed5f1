//! API error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use yieldcalc_core::error::CoreError;
use yieldcalc_core::validation::ValidationError;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body parsed but failed validation.
    #[error("Validation failed")]
    Validation(#[from] ValidationError),

    /// The request body could not be parsed as a calculation request.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The calculation itself failed.
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CoreError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
    details: Vec<String>,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(err) => ErrorResponse::new("Validation failed", err.details),
            ApiError::InvalidBody(rejection) => {
                ErrorResponse::new("Invalid request body", vec![rejection.body_text()])
            }
            ApiError::Calculation(err) => {
                tracing::error!(error = %err, "bond calculation failed");
                ErrorResponse::new("Internal server error", vec![err.to_string()])
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError::from(ValidationError::new(vec!["x".into()]));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let calculation = ApiError::from(CoreError::invalid_date("out of range"));
        assert_eq!(calculation.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            calculation.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
