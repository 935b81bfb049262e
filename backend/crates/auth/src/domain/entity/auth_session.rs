//! Auth Session Entity
//!
//! A signed-in session as granted by the identity provider. Created on a
//! successful code validation, cleared on sign-out, read-only in between.

use std::fmt;

use crate::domain::value_object::mobile_number::MobileNumber;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Freshly granted session
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub mobile: MobileNumber,
    pub token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    /// Token lifetime reported by the provider
    pub expires_in_seconds: i64,
}

impl AuthSession {
    /// Token lifetime in (fractional) days
    pub fn expires_in_days(&self) -> f64 {
        self.expires_in_seconds as f64 / SECONDS_PER_DAY
    }

    /// The request-scoped view handlers get on later requests
    pub fn user(&self) -> SessionUser {
        SessionUser {
            mobile: self.mobile.clone(),
            token: self.token.clone(),
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("mobile", &self.mobile.masked())
            .field("token_type", &self.token_type)
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish_non_exhaustive()
    }
}

/// Session rebuilt from request cookies
#[derive(Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub mobile: MobileNumber,
    token: String,
}

impl SessionUser {
    /// `None` when the token is blank or the stored mobile is malformed
    pub fn from_parts(token: &str, mobile: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        let mobile = MobileNumber::new(mobile).ok()?;
        Some(Self {
            mobile,
            token: token.to_string(),
        })
    }

    /// Bearer token for calls made on the user's behalf
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for SessionUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionUser")
            .field("mobile", &self.mobile.masked())
            .finish_non_exhaustive()
    }
}
