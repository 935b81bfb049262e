//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::gateway::IdentityProvider;
use crate::error::AuthResult;
use crate::infra::identity_http::HttpIdentityProvider;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the HTTP identity provider
pub fn auth_router(config: AuthConfig) -> AuthResult<Router> {
    let provider = HttpIdentityProvider::new(&config)?;
    Ok(auth_router_generic(provider, config))
}

/// Create a generic Auth router for any identity provider implementation
pub fn auth_router_generic<P>(provider: P, config: AuthConfig) -> Router
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route("/send-code", post(handlers::send_code::<P>))
        .route("/validate-code", post(handlers::validate_code::<P>))
        .route("/logout", post(handlers::logout::<P>))
        .route("/status", get(handlers::session_status))
        .route("/me", get(handlers::me))
        .with_state(state)
}
