//! Shared Kernel - vocabulary shared by every crate
//!
//! This crate contains the small core used across domains:
//! - The unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed integer ids for persisted rows
//! - Pagination arithmetic for list endpoints
//!
//! Only things with the same meaning in posts, accommodation and auth live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod pagination;
