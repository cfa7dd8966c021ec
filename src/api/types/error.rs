//! API error type and wire shape

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error payload returned to structured clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            // Every pipeline failure is a client-visible 400.
            DomainError::MissingField { .. }
            | DomainError::NotANumber { .. }
            | DomainError::NonPositiveValue { .. }
            | DomainError::MalformedBody { .. }
            | DomainError::PredictionFailed { .. } => Self::bad_request(err.to_string()),
            DomainError::Dataset { .. }
            | DomainError::ModelLoad { .. }
            | DomainError::Storage { .. } => Self::internal(err.to_string()),
        }
    }
}
