//! Authentication Handlers

use std::time::Duration;

use axum::{Extension, extract::State, response::IntoResponse};
use http::header::SET_COOKIE;
use shared::client::{LoginRequest, LoginResponse, SessionInfo};

use crate::auth::session::{clear_session_cookie, safe_redirect, session_cookie, verify_admin};
use crate::api::extract::ApiJson;
use crate::auth::{ADMIN_ROLE, CurrentUser};
use crate::core::ServerState;
use crate::messages;
use crate::security_log;
use crate::utils::{ApiResponse, AppError, AppResult};

/// Fixed delay before answering a failed login
const AUTH_FAILURE_DELAY_MS: u64 = 300;

/// POST /api/auth/login
///
/// Sets the session cookie and also returns the token for API clients.
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if !verify_admin(&state.config.admin, &req.username, &req.password) {
        tokio::time::sleep(Duration::from_millis(AUTH_FAILURE_DELAY_MS)).await;
        security_log!("WARN", "login_failed", username = req.username.as_str());
        return Err(AppError::invalid_credentials(messages::LOGIN_FAILED));
    }

    let issued = state
        .get_jwt_service()
        .generate_token(&req.username, ADMIN_ROLE)
        .map_err(|e| AppError::internal(format!("Failed to issue session: {e}")))?;

    security_log!("INFO", "login_success", username = req.username.as_str());

    let cookie = session_cookie(
        &issued.token,
        state.config.session_ttl_secs(),
        state.config.is_production(),
    );
    let body = LoginResponse {
        token: issued.token,
        session: SessionInfo {
            username: req.username,
            role: ADMIN_ROLE.to_string(),
            expires_at: issued.expires_at,
        },
        redirect: safe_redirect(req.next.as_deref()),
    };

    Ok((
        [(SET_COOKIE, cookie)],
        ApiResponse::success_with_message(messages::LOGIN_OK, body),
    ))
}

/// POST|GET /api/auth/logout
pub async fn logout() -> impl IntoResponse {
    (
        [(SET_COOKIE, clear_session_cookie())],
        ApiResponse::ok_with_message(messages::LOGGED_OUT),
    )
}

/// GET /api/auth/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> ApiResponse<SessionInfo> {
    ApiResponse::success(SessionInfo {
        username: user.username,
        role: user.role,
        expires_at: user.expires_at,
    })
}
