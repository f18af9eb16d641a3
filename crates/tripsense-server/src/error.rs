//! API Errors
//!
//! All failures surface to the caller as a flat `{"error": string}` body:
//! 400 for client-caused validation failures, 500 for provider failures
//! (network, empty completion, unparseable JSON). Every error is logged
//! before it leaves the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use tripsense::DomainError;

/// Flat error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-caused: required field missing or invalid
    #[error("{0}")]
    Validation(String),

    /// Upstream-caused: the provider call or its JSON output failed
    #[error("{0}")]
    Provider(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
            DomainError::Provider(_) | DomainError::Parse(_) => {
                ApiError::Provider(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(msg) => tracing::warn!(error = %msg, "request rejected"),
            ApiError::Provider(msg) => tracing::error!(error = %msg, "provider call failed"),
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
