//! Session Extractors
//!
//! The signed-in user is passed to handlers explicitly, rebuilt from the
//! `auth_token` / `auth_user` cookies on every request.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::SessionUser;
use crate::error::AuthError;

/// Session cookies, if present and well-formed
pub fn session_from_jar(jar: &CookieJar, config: &AuthConfig) -> Option<SessionUser> {
    let token = jar.get(&config.token_cookie.name)?;
    let mobile = jar.get(&config.user_cookie.name)?;
    SessionUser::from_parts(token.value(), mobile.value())
}

/// Optional session
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<SessionUser>);

impl<S> FromRequestParts<S> for CurrentSession
where
    Arc<AuthConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AuthConfig>::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(session_from_jar(&jar, &config)))
    }
}

/// Required session; rejects with 401
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionUser);

impl<S> FromRequestParts<S> for RequireSession
where
    Arc<AuthConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state)
            .await
            .unwrap_or(CurrentSession(None));
        session.map(Self).ok_or(AuthError::NotAuthenticated)
    }
}
