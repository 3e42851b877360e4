//! services/web/src/error.rs
//!
//! Defines the startup error type for the service and the error type returned
//! by request handlers.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use invitation_core::{InvitationError, PortError, ValidationError};
use tracing::{debug, error};

/// The body sent for an unknown invitation id.
pub const NOT_FOUND_MESSAGE: &str = "Invitation not found.";

/// Errors that abort startup of the `web` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents a failure while applying the database migrations.
    #[error("Migration Error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while handling a request, mapped onto HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] PortError),

    #[error("Invitation {0} not found")]
    NotFound(i64),

    #[error("Malformed form submission: {1}")]
    Multipart(StatusCode, String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl From<InvitationError> for AppError {
    fn from(err: InvitationError) -> Self {
        match err {
            InvitationError::Validation(e) => AppError::Validation(e),
            InvitationError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::Multipart(err.status(), err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Multipart(status, msg) => (status, msg),
            AppError::NotFound(id) => {
                debug!(invitation_id = id, "Invitation not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::Storage(e) => {
                error!("Storage failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, please try again later.".to_string(),
                )
            }
            AppError::Template(e) => {
                error!("Failed to render template: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render page".to_string(),
                )
            }
        };
        (status, message).into_response()
    }
}
