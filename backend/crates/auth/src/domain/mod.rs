//! Domain Layer
//!
//! Contains entities, value objects, and the identity provider port.

pub mod entity;
pub mod gateway;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_session::{AuthSession, SessionUser},
    login_flow::{LoginFlow, LoginStep},
};
pub use gateway::IdentityProvider;
pub use value_object::{mobile_number::MobileNumber, otp_code::OtpCode};
