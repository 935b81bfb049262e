//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Request for POST /api/auth/send-code
#[derive(Debug, Clone, Deserialize)]
pub struct SendCodeRequest {
    pub mobile: String,
}

/// Response for POST /api/auth/send-code
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeResponse {
    pub mobile: String,
    pub message: Option<String>,
    /// Seconds before a new code may be requested
    pub timer: Option<i64>,
}

/// Request for POST /api/auth/validate-code
#[derive(Deserialize)]
pub struct ValidateCodeRequest {
    pub mobile: String,
    pub code: String,
}

/// Response for POST /api/auth/validate-code
///
/// The token itself only travels in the `auth_token` cookie.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCodeResponse {
    pub mobile: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_in_days: f64,
}

/// Response for GET /api/auth/status
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub mobile: Option<String>,
}

/// Response for GET /api/auth/me
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub mobile: String,
}
