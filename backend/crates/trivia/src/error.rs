//! Trivia Error Types
//!
//! Trivia-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Trivia-specific result type alias
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Trivia-specific error variants
#[derive(Debug, Error)]
pub enum TriviaError {
    /// Generator output could not be parsed at all
    ///
    /// The only hard failure in the normalizer; structural deficiencies
    /// below the parse are auto-repaired, not errors.
    #[error("Generator returned unparsable output: {0}")]
    InvalidGeneratorOutput(String),

    /// Generation pipeline failed (transport or unparsable output)
    ///
    /// Carries the underlying cause string so the client can decide to
    /// retry. Never retried internally.
    #[error("Quiz generation failed: {0}")]
    GenerationFailed(String),

    /// Rating missing or outside the accepted 1..=5 range
    #[error("Rating must be an integer between 1 and 5")]
    InvalidRating,

    /// Referenced user absent (stale/forged token after the auth gate)
    #[error("User not found")]
    UserNotFound,

    /// Malformed or missing client input
    #[error("{0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TriviaError::InvalidRating
            | TriviaError::UserNotFound
            | TriviaError::Validation(_) => StatusCode::BAD_REQUEST,
            TriviaError::InvalidGeneratorOutput(_)
            | TriviaError::GenerationFailed(_)
            | TriviaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::InvalidRating
            | TriviaError::UserNotFound
            | TriviaError::Validation(_) => ErrorKind::BadRequest,
            TriviaError::InvalidGeneratorOutput(_)
            | TriviaError::GenerationFailed(_)
            | TriviaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TriviaError::GenerationFailed(cause) => {
                tracing::error!(cause = %cause, "Quiz generation failed");
            }
            TriviaError::Internal(msg) => {
                tracing::error!(message = %msg, "Trivia internal error");
            }
            TriviaError::UserNotFound => {
                tracing::warn!("Authenticated user no longer exists");
            }
            _ => {
                tracing::debug!(error = %self, "Trivia error");
            }
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<auth::AuthError> for TriviaError {
    fn from(err: auth::AuthError) -> Self {
        match err {
            auth::AuthError::UserNotFound => TriviaError::UserNotFound,
            other => TriviaError::Internal(other.to_string()),
        }
    }
}
