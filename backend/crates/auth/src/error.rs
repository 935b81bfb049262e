//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::UpstreamError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Mobile number is not `09` followed by nine digits
    #[error("Enter a valid mobile number (e.g. 09123456789)")]
    InvalidMobile,

    /// Code is not exactly four digits
    #[error("Enter the complete verification code")]
    InvalidCode,

    /// Identity provider answered but did not send a code
    #[error("Sending the verification code failed, try again")]
    CodeNotSent,

    /// Identity provider rejected the code
    #[error("The code is wrong or has expired")]
    CodeRejected,

    /// Code submitted before a code was requested
    #[error("Request a verification code first")]
    CodeNotRequested,

    /// No session cookie on a protected route
    #[error("Sign-in required")]
    NotAuthenticated,

    /// Identity provider unreachable or returned non-2xx
    #[error("Identity provider error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidMobile | AuthError::InvalidCode => StatusCode::BAD_REQUEST,
            AuthError::CodeRejected | AuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AuthError::CodeNotRequested => StatusCode::CONFLICT,
            AuthError::CodeNotSent | AuthError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidMobile | AuthError::InvalidCode => ErrorKind::BadRequest,
            AuthError::CodeRejected | AuthError::NotAuthenticated => ErrorKind::Unauthorized,
            AuthError::CodeNotRequested => ErrorKind::Conflict,
            AuthError::CodeNotSent | AuthError::Upstream(_) => ErrorKind::BadGateway,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Upstream(_) => AppError::new(
                self.kind(),
                "Sign-in service is unavailable, check your connection and try again",
            ),
            AuthError::Internal(_) => AppError::new(self.kind(), "Sign-in failed"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Upstream(e) => {
                tracing::error!(error = %e, "Identity provider error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::CodeNotSent => {
                tracing::warn!("Identity provider did not send a code");
            }
            AuthError::CodeRejected => {
                tracing::warn!("Verification code rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
