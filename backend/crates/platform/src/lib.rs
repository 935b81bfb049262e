//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie building (`Set-Cookie` values for the auth session)
//! - Outbound HTTP client for third-party APIs, with per-upstream static headers

pub mod client;
pub mod cookie;
