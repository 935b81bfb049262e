//! Login Flow Use Case
//!
//! Drives a `LoginFlow` through the identity provider.

use std::sync::Arc;

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::entity::login_flow::{LoginFlow, LoginStep};
use crate::domain::gateway::IdentityProvider;
use crate::domain::value_object::{mobile_number::MobileNumber, otp_code::OtpCode};
use crate::error::{AuthError, AuthResult};

/// Outcome of a successful send-code step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSent {
    pub mobile: MobileNumber,
    pub message: Option<String>,
    /// Seconds until a new code may be requested, if the provider said
    pub timer: Option<i64>,
}

/// Login flow use case
pub struct LoginFlowUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> LoginFlowUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Step 1: validate the mobile and ask for a code
    ///
    /// A malformed mobile never reaches the provider.
    pub async fn submit_mobile(&self, flow: &mut LoginFlow, raw_mobile: &str) -> AuthResult<CodeSent> {
        let result = self.send_code(raw_mobile).await;

        match &result {
            Ok(sent) => flow.advance(LoginStep::AwaitingCode {
                mobile: sent.mobile.clone(),
            }),
            Err(e) => flow.fail(e),
        }

        result
    }

    /// Step 2: exchange the code for a session
    ///
    /// Exactly one validate call per well-formed submission.
    pub async fn submit_code(&self, flow: &mut LoginFlow, raw_code: &str) -> AuthResult<AuthSession> {
        let Some(mobile) = flow.pending_mobile().cloned() else {
            let err = AuthError::CodeNotRequested;
            flow.fail(&err);
            return Err(err);
        };

        let result = self.validate_code(mobile, raw_code).await;

        match &result {
            Ok(session) => flow.advance(LoginStep::Authenticated(session.clone())),
            Err(e) => flow.fail(e),
        }

        result
    }

    async fn send_code(&self, raw_mobile: &str) -> AuthResult<CodeSent> {
        let mobile = MobileNumber::new(raw_mobile)?;

        let reply = self.provider.send_code(&mobile).await?;
        if !reply.is_sent() {
            tracing::warn!(mobile = %mobile.masked(), status = %reply.status, "Code not sent");
            return Err(AuthError::CodeNotSent);
        }

        tracing::info!(mobile = %mobile.masked(), "Verification code sent");

        let dispatch = reply.result;
        Ok(CodeSent {
            mobile,
            message: dispatch
                .as_ref()
                .map(|d| d.message.clone())
                .filter(|m| !m.is_empty()),
            timer: dispatch.map(|d| d.timer).filter(|t| *t > 0),
        })
    }

    async fn validate_code(&self, mobile: MobileNumber, raw_code: &str) -> AuthResult<AuthSession> {
        let code = OtpCode::new(raw_code)?;

        let reply = self.provider.validate_code(&mobile, &code).await?;
        let Some(grant) = reply.grant() else {
            tracing::warn!(
                mobile = %mobile.masked(),
                trace_id = reply.trace_id.as_deref().unwrap_or("-"),
                unauthorized = reply.unauthorized_request,
                "Code validation failed"
            );
            return Err(AuthError::CodeRejected);
        };

        let session = AuthSession {
            mobile,
            token: grant.access_token.clone(),
            token_type: grant.token_type.clone(),
            refresh_token: grant.refresh_token.clone(),
            expires_in_seconds: grant.expires_in,
        };

        tracing::info!(
            mobile = %session.mobile.masked(),
            expires_in_days = session.expires_in_days(),
            "User signed in"
        );

        Ok(session)
    }
}
