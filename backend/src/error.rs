//! Error handling for the Velvet Pour backend
//!
//! Every failure is caught at the request boundary and converted into a
//! `{"error": "..."}` body with an appropriate status class; the full detail
//! stays in the tracing log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    #[error("Payment provider error: {0}")]
    Provider(String),

    #[error("Mail delivery error: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnknownPackage(_) => (
                StatusCode::BAD_REQUEST,
                "Unknown package selected".to_string(),
            ),
            AppError::Provider(_) => (
                StatusCode::BAD_GATEWAY,
                "Failed to create checkout session. Please try again later.".to_string(),
            ),
            AppError::Delivery(_) => (
                StatusCode::BAD_GATEWAY,
                "Failed to send email. Please try again later.".to_string(),
            ),
            AppError::Configuration(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
            ),
        };

        // Log the full error for operator visibility
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
