//! Identity Provider Port
//!
//! Wire types follow the provider's JSON.

use serde::Deserialize;

use crate::domain::value_object::{mobile_number::MobileNumber, otp_code::OtpCode};
use crate::error::AuthResult;

/// Reply to `send-code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendCodeReply {
    #[serde(default)]
    pub result: Option<CodeDispatch>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeDispatch {
    #[serde(default)]
    pub message: String,
    /// Seconds until another code may be requested
    #[serde(default)]
    pub timer: i64,
}

impl SendCodeReply {
    /// The provider signals success either way
    pub fn is_sent(&self) -> bool {
        self.status == "success" || self.result.is_some()
    }
}

/// Reply to `validate-code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateCodeReply {
    #[serde(default)]
    pub result: Option<TokenGrant>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default, rename = "unauthorizedRequest")]
    pub unauthorized_request: bool,
    #[serde(default, rename = "__traceId")]
    pub trace_id: Option<String>,
}

#[derive(Clone, Default, Deserialize)]
pub struct TokenGrant {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGrant")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish_non_exhaustive()
    }
}

impl ValidateCodeReply {
    /// Accepted only when `success` and a non-empty token are both present
    pub fn grant(&self) -> Option<&TokenGrant> {
        if !self.success {
            return None;
        }
        self.result
            .as_ref()
            .filter(|grant| !grant.access_token.is_empty())
    }
}

/// Identity provider port
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Ask the provider to text a code to `mobile`
    async fn send_code(&self, mobile: &MobileNumber) -> AuthResult<SendCodeReply>;

    /// Exchange a code for an access token
    async fn validate_code(
        &self,
        mobile: &MobileNumber,
        code: &OtpCode,
    ) -> AuthResult<ValidateCodeReply>;
}
