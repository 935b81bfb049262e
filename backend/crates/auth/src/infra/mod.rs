//! Infrastructure Layer
//!
//! Identity provider implementations.

pub mod identity_http;
