//! Application Layer
//!
//! Contains use cases and application services.

pub mod config;
pub mod login_flow;

// Re-exports
pub use config::AuthConfig;
pub use login_flow::{CodeSent, LoginFlowUseCase};
