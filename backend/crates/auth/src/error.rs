//! Auth Error Types
//!
//! Failures that are not reported in-band as field errors. Everything here
//! is either a programming/storage fault or a constraint violation that the
//! application layer translates before it reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already exists (unique constraint on insert)
    #[error("User name already exists")]
    UserNameTaken,

    /// Hashing or verifying a password failed
    #[error("Password hashing error: {0}")]
    Password(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            AuthError::Password(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; the client gets a generic
    /// message.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Password(e) => {
                tracing::error!(error = %e, "Auth password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserNameTaken => {
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

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error().with_source(err)
    }
}
