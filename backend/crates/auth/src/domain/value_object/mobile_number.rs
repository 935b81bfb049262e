//! Mobile Number Value Object
//!
//! The sign-in identifier: an Iranian mobile number in local form.
//!
//! ## Invariants
//! - `09` followed by exactly nine ASCII digits (`^09[0-9]{9}$`)
//! - Surrounding whitespace is trimmed before validation

use derive_more::Display;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error::{AuthError, AuthResult};

static RE_MOBILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn new(raw: &str) -> AuthResult<Self> {
        let mobile = raw.trim();
        if !RE_MOBILE.is_match(mobile) {
            return Err(AuthError::InvalidMobile);
        }
        Ok(Self(mobile.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four digits, for logs
    pub fn masked(&self) -> String {
        format!("*******{}", &self.0[7..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert_eq!(MobileNumber::new("09123456789").unwrap().as_str(), "09123456789");
        assert_eq!(MobileNumber::new(" 09351234567 ").unwrap().as_str(), "09351234567");
    }

    #[test]
    fn test_invalid_numbers() {
        for raw in [
            "",
            "9123456789",
            "0912345678",
            "091234567890",
            "+989123456789",
            "08123456789",
            "0912345678a",
            "۰۹۱۲۳۴۵۶۷۸۹",
        ] {
            assert!(
                matches!(MobileNumber::new(raw), Err(AuthError::InvalidMobile)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_masked() {
        let mobile = MobileNumber::new("09123456789").unwrap();
        assert_eq!(mobile.masked(), "*******6789");
        assert_eq!(mobile.to_string(), "09123456789");
    }
}
