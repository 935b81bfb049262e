//! HTTP Identity Provider

use platform::client::UpstreamClient;
use serde::Serialize;

use crate::application::config::AuthConfig;
use crate::domain::gateway::{IdentityProvider, SendCodeReply, ValidateCodeReply};
use crate::domain::value_object::{mobile_number::MobileNumber, otp_code::OtpCode};
use crate::error::AuthResult;

#[derive(Debug, Serialize)]
struct SendCodeBody<'a> {
    mobile: &'a str,
}

#[derive(Serialize)]
struct ValidateCodeBody<'a> {
    mobile: &'a str,
    code: &'a str,
}

/// Identity provider reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: UpstreamClient,
}

impl HttpIdentityProvider {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        Ok(Self {
            client: UpstreamClient::new(config.identity.clone())?,
        })
    }
}

impl IdentityProvider for HttpIdentityProvider {
    async fn send_code(&self, mobile: &MobileNumber) -> AuthResult<SendCodeReply> {
        let body = SendCodeBody {
            mobile: mobile.as_str(),
        };
        Ok(self.client.post_json("send-code", &body).await?)
    }

    async fn validate_code(
        &self,
        mobile: &MobileNumber,
        code: &OtpCode,
    ) -> AuthResult<ValidateCodeReply> {
        let body = ValidateCodeBody {
            mobile: mobile.as_str(),
            code: code.as_str(),
        };
        Ok(self.client.post_json("validate-code", &body).await?)
    }
}
