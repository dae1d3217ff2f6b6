//! Post Error Types
//!
//! This module provides post-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
///
/// A missing post is not an error; lookups return `Option`.
#[derive(Debug, Error)]
pub enum PostError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            PostError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        err.log();
        let app_err = match err.kind() {
            ErrorKind::ServiceUnavailable => AppError::service_unavailable("Database unavailable"),
            _ => AppError::internal("Internal server error"),
        };
        app_err.with_source(err)
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
