//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::{StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::login_flow::LoginFlowUseCase;
use crate::domain::entity::login_flow::LoginFlow;
use crate::domain::gateway::IdentityProvider;
use crate::domain::value_object::mobile_number::MobileNumber;
use crate::error::AuthResult;
use crate::presentation::dto::{
    MeResponse, SendCodeRequest, SendCodeResponse, SessionStatusResponse, ValidateCodeRequest,
    ValidateCodeResponse,
};
use crate::presentation::session::{CurrentSession, RequireSession};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

impl<P> FromRef<AuthAppState<P>> for Arc<AuthConfig>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AuthAppState<P>) -> Self {
        state.config.clone()
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/send-code
pub async fn send_code<P>(
    State(state): State<AuthAppState<P>>,
    Json(req): Json<SendCodeRequest>,
) -> AuthResult<Json<SendCodeResponse>>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let use_case = LoginFlowUseCase::new(state.provider.clone());
    let mut flow = LoginFlow::new();

    let sent = use_case.submit_mobile(&mut flow, &req.mobile).await?;

    Ok(Json(SendCodeResponse {
        mobile: sent.mobile.to_string(),
        message: sent.message,
        timer: sent.timer,
    }))
}

/// POST /api/auth/validate-code
pub async fn validate_code<P>(
    State(state): State<AuthAppState<P>>,
    Json(req): Json<ValidateCodeRequest>,
) -> AuthResult<impl IntoResponse>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let use_case = LoginFlowUseCase::new(state.provider.clone());
    let mut flow = LoginFlow::awaiting_code(MobileNumber::new(&req.mobile)?);

    let session = use_case.submit_code(&mut flow, &req.code).await?;

    let max_age = Some(session.expires_in_seconds);
    let token_cookie = state
        .config
        .token_cookie
        .build_set_cookie(&session.token, max_age);
    let user_cookie = state
        .config
        .user_cookie
        .build_set_cookie(session.mobile.as_str(), max_age);

    Ok((
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, token_cookie),
            (header::SET_COOKIE, user_cookie),
        ]),
        Json(ValidateCodeResponse {
            mobile: session.mobile.to_string(),
            token_type: session.token_type.clone(),
            expires_in: session.expires_in_seconds,
            expires_in_days: session.expires_in_days(),
        }),
    ))
}

// ============================================================================
// Session
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<P>(
    State(state): State<AuthAppState<P>>,
    CurrentSession(session): CurrentSession,
) -> impl IntoResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    if let Some(user) = session {
        tracing::info!(mobile = %user.mobile.masked(), "User signed out");
    }

    (
        StatusCode::NO_CONTENT,
        AppendHeaders([
            (header::SET_COOKIE, state.config.token_cookie.build_delete_cookie()),
            (header::SET_COOKIE, state.config.user_cookie.build_delete_cookie()),
        ]),
    )
}

/// GET /api/auth/status
pub async fn session_status(
    CurrentSession(session): CurrentSession,
) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        authenticated: session.is_some(),
        mobile: session.map(|user| user.mobile.to_string()),
    })
}

/// GET /api/auth/me
pub async fn me(RequireSession(user): RequireSession) -> Json<MeResponse> {
    Json(MeResponse {
        mobile: user.mobile.to_string(),
    })
}
