//! OTP Code Value Object

use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Length of the code the identity provider sends
pub const OTP_CODE_LENGTH: usize = 4;

/// Four-digit one-time code
///
/// `Debug` is redacted so codes never reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn new(raw: &str) -> AuthResult<Self> {
        let code = raw.trim();
        if code.len() != OTP_CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuthError::InvalidCode);
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_digits() {
        assert_eq!(OtpCode::new("1234").unwrap().as_str(), "1234");
        assert_eq!(OtpCode::new(" 0007 ").unwrap().as_str(), "0007");
    }

    #[test]
    fn test_rejects_other_shapes() {
        for raw in ["", "123", "12345", "12a4", "۱۲۳۴"] {
            assert!(matches!(OtpCode::new(raw), Err(AuthError::InvalidCode)));
        }
    }

    #[test]
    fn test_debug_is_redacted() {
        let code = OtpCode::new("4321").unwrap();
        assert!(!format!("{code:?}").contains("4321"));
    }
}
