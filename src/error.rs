//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::Envelope;

/// Startup configuration failures. Surfaced before any connection attempt.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

/// Request-path failures. Each variant carries the status code the service
/// has always answered with for that operation; clients key off `isSuccess`
/// in the envelope, not the code, so the mapping is preserved as-is.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing id params")]
    MissingId,
    #[error("{0}")]
    Payload(String),
    #[error(transparent)]
    Create(sqlx::Error),
    #[error(transparent)]
    List(sqlx::Error),
    #[error(transparent)]
    Fetch(sqlx::Error),
    #[error(transparent)]
    Delete(sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Payload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Create(_) | AppError::List(_) => StatusCode::BAD_REQUEST,
            AppError::MissingId | AppError::Fetch(_) | AppError::Delete(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}
