//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (public)
//! - [`auth`] - 登录 / 登出 / 当前会话
//! - [`customers`] - 客户
//! - [`bookings`] - 预约、结账
//! - [`admin`] - 管理统计
//! - [`extract`] - JSON 提取器 (统一错误格式)

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod customers;
pub mod extract;
pub mod health;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(customers::router())
        .merge(bookings::router())
        .merge(admin::router())
}

/// Full application: routes, session middleware, tower-http layers
pub fn build_router(state: ServerState) -> Router {
    build_app()
        // require_auth skips public routes itself
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
}
