//! Infrastructure Layer - Upstream implementations

pub mod http;
