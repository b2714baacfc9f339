//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Invalid credentials (unknown user or wrong password)
    ///
    /// The two cases are deliberately indistinguishable to the client.
    #[error("Invalid user name or password")]
    InvalidCredentials,

    /// Referenced user absent
    ///
    /// Only reachable via stale or forged tokens: the session gate does not
    /// re-check existence, so a mutation may find the user missing. Maps to
    /// 400 at the transport, matching the result-submission contract.
    #[error("User not found")]
    UserNotFound,

    /// Missing/invalid/expired session credential
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed or missing client input
    #[error("{0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNameTaken
            | AuthError::InvalidCredentials
            | AuthError::UserNotFound
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken
            | AuthError::InvalidCredentials
            | AuthError::UserNotFound
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::UserNotFound => {
                tracing::warn!("Authenticated user no longer exists");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(_: platform::token::TokenError) -> Self {
        // Malformed, forged, and expired tokens are all the same 401
        AuthError::Unauthorized
    }
}
