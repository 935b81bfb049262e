//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Mobile number and OTP code value objects, login flow, identity provider port
//! - `application/` - Login flow use case, cookie configuration
//! - `infra/` - HTTP identity provider
//! - `presentation/` - HTTP handlers, DTOs, session extractors, router
//!
//! ## Features
//! - Passwordless sign-in: a one-time code is sent to a mobile number
//! - The identity provider issues the access token; this service only relays it
//!
//! ## Session Model
//! - No server-side session store and no ambient global state
//! - On success the token and the mobile are written to cookies
//!   (`auth_token`, `auth_user`); `Max-Age` follows the provider's `expires_in`
//! - Handlers receive the session explicitly through the `CurrentSession` /
//!   `RequireSession` extractors
//! - Sign-out clears both cookies

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::auth_session::{AuthSession, SessionUser};
pub use domain::entity::login_flow::{LoginFlow, LoginStep};
pub use domain::gateway::IdentityProvider;
pub use error::{AuthError, AuthResult};
pub use infra::identity_http::HttpIdentityProvider;
pub use presentation::router::{auth_router, auth_router_generic};
pub use presentation::session::{CurrentSession, RequireSession};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
