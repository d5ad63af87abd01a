//! 认证中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::ErrorCode;

use crate::AppError;
use crate::auth::session::{extract_token, login_url};
use crate::auth::{CurrentUser, JwtError};
use crate::core::ServerState;
use crate::messages;
use crate::security_log;

/// API routes reachable without a session
const PUBLIC_API_ROUTES: [&str; 2] = ["/api/auth/login", "/api/auth/logout"];

/// 认证中间件 - 要求管理员登录
///
/// Reads the session token from `Authorization: Bearer <token>` or the
/// `petitute_session` cookie and injects [`CurrentUser`] into the request
/// extensions.
///
/// # 跳过认证的路径
///
/// - `OPTIONS *`
/// - 非 `/api/` 路径 (`/health`, unknown paths fall through to 404)
/// - `/api/auth/login`, `/api/auth/logout`
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无令牌 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
/// | 非管理员角色 | 401 TokenInvalid |
///
/// Every rejection carries a `login` detail (`/login?next=<path>`).
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || PUBLIC_API_ROUTES.contains(&path.as_str()) {
        return Ok(next.run(req).await);
    }

    let Some(token) = extract_token(req.headers()) else {
        security_log!("WARN", "auth_missing", uri = path.as_str());
        return Err(
            AppError::with_message(ErrorCode::NotAuthenticated, messages::LOGIN_REQUIRED)
                .with_detail("login", login_url(&path)),
        );
    };

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            if !user.is_admin() {
                security_log!(
                    "WARN",
                    "auth_forbidden_role",
                    username = user.username.as_str(),
                    role = user.role.as_str(),
                    uri = path.as_str()
                );
                return Err(
                    AppError::with_message(ErrorCode::TokenInvalid, messages::LOGIN_REQUIRED)
                        .with_detail("login", login_url(&path)),
                );
            }
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            let error = e.to_string();
            security_log!(
                "WARN",
                "auth_failed",
                error = error.as_str(),
                uri = path.as_str()
            );

            let err = match e {
                JwtError::ExpiredToken => {
                    AppError::with_message(ErrorCode::TokenExpired, messages::SESSION_EXPIRED)
                }
                _ => AppError::with_message(ErrorCode::TokenInvalid, messages::LOGIN_REQUIRED),
            };
            Err(err.with_detail("login", login_url(&path)))
        }
    }
}
