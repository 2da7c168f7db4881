//! Error types for the property cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the property cache service.
#[derive(Error, Debug)]
pub enum AppError {
    /// The backing property store failed to answer a query
    #[error("Backing store error: {0}")]
    BackingStore(String),

    /// The cache store could not be reached or rejected an operation
    #[error("Cache backend error: {0}")]
    CacheBackend(String),

    /// A payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration or seed data
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BackingStore(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::CacheBackend(_)
            | AppError::Serialization(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the property cache service.
pub type Result<T> = std::result::Result<T, AppError>;
