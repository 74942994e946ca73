//! Error types for the validation API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::analysis::AnalysisError;
use crate::auth::AuthError;

/// Message returned in place of any internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API misconfiguration, please contact support.")]
    MisconfiguredServer,

    #[error("Unauthorized: Invalid or missing API Credentials.")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    /// The detail is logged, never returned to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MisconfiguredServer => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::Internal(detail) => {
                error!(error = %detail, "An unexpected server error occurred");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MisconfiguredServer => ApiError::MisconfiguredServer,
            AuthError::Unauthorized => ApiError::Unauthorized,
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::Parse(detail) => ApiError::BadRequest(format!(
                "Could not parse phone number, Ensure it includes a country code. Details: {}",
                detail
            )),
            AnalysisError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        if e.is_panic() {
            ApiError::Internal("number analysis panicked".to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}
