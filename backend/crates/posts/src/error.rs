//! Post Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

#[derive(Debug, Error)]
pub enum PostError {
    /// No post with the requested slug
    #[error("Post not found")]
    NotFound,

    /// Another post already owns the slug
    #[error("Slug already in use: {0}")]
    SlugTaken(String),

    /// Empty or malformed form field
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PostError {
    pub fn validation(message: impl Into<String>) -> Self {
        PostError::Validation(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::SlugTaken(_) => StatusCode::CONFLICT,
            PostError::Validation(_) => StatusCode::BAD_REQUEST,
            PostError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound => ErrorKind::NotFound,
            PostError::SlugTaken(_) => ErrorKind::Conflict,
            PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database details stay in the log; the client only sees a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::SlugTaken(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Choose a different slug and submit again"),
            PostError::Database(_) => {
                AppError::new(self.kind(), "Saving or loading the post failed")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::SlugTaken(slug) => {
                tracing::warn!(slug = %slug, "Slug collision");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
