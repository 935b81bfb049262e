//! Login Flow Entity
//!
//! Two-step sign-in: mobile number, then the code sent to it.
//!
//! ```text
//! AwaitingMobile --(code sent)--> AwaitingCode --(code accepted)--> Authenticated
//!        ^                             |
//!        +------- back_to_mobile ------+
//! ```
//!
//! A failed step records an error and leaves the step unchanged.

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::value_object::mobile_number::MobileNumber;
use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    AwaitingMobile,
    AwaitingCode { mobile: MobileNumber },
    Authenticated(AuthSession),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFlow {
    step: LoginStep,
    error: Option<String>,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            step: LoginStep::AwaitingMobile,
            error: None,
        }
    }

    /// Resume a flow whose code was already sent (stateless HTTP callers)
    pub fn awaiting_code(mobile: MobileNumber) -> Self {
        Self {
            step: LoginStep::AwaitingCode { mobile },
            error: None,
        }
    }

    pub fn step(&self) -> &LoginStep {
        &self.step
    }

    /// Message of the last failed step
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mobile the code was sent to
    pub fn pending_mobile(&self) -> Option<&MobileNumber> {
        match &self.step {
            LoginStep::AwaitingCode { mobile } => Some(mobile),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&AuthSession> {
        match &self.step {
            LoginStep::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// "Edit number": return to the first step
    pub fn back_to_mobile(&mut self) {
        self.step = LoginStep::AwaitingMobile;
        self.error = None;
    }

    pub(crate) fn advance(&mut self, step: LoginStep) {
        self.step = step;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, error: &AuthError) {
        self.error = Some(error.to_app_error().message().to_string());
    }
}
