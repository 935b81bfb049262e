//! Value Object Module

pub mod mobile_number;
pub mod otp_code;
