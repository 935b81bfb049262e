//! Accommodation Error Types
//!
//! Accommodation-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::UpstreamError;
use thiserror::Error;

/// Accommodation-specific result type alias
pub type AccommodationResult<T> = Result<T, AccommodationError>;

#[derive(Debug, Error)]
pub enum AccommodationError {
    /// Unknown or malformed accommodation code
    #[error("Accommodation not found")]
    NotFound,

    /// City name that reduces to an empty slug
    #[error("Invalid city name: {0}")]
    InvalidCity(String),

    /// Upstream client could not be constructed (bad static header, TLS setup)
    #[error("Upstream setup failed: {0}")]
    Upstream(#[from] UpstreamError),
}

impl AccommodationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccommodationError::NotFound => StatusCode::NOT_FOUND,
            AccommodationError::InvalidCity(_) => StatusCode::BAD_REQUEST,
            AccommodationError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccommodationError::NotFound => ErrorKind::NotFound,
            AccommodationError::InvalidCity(_) => ErrorKind::BadRequest,
            AccommodationError::Upstream(_) => ErrorKind::BadGateway,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccommodationError::Upstream(_) => {
                AppError::new(self.kind(), "Listing service is unavailable")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccommodationError::Upstream(e) => {
                tracing::error!(error = %e, "Accommodation upstream error");
            }
            _ => {
                tracing::debug!(error = %self, "Accommodation error");
            }
        }
    }
}

impl From<AccommodationError> for AppError {
    fn from(err: AccommodationError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AccommodationError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
