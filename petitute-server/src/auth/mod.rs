//! 认证模块
//!
//! Single admin account, session carried as a JWT:
//! - [`JwtService`] - 令牌签发与验证
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`session`] - cookie / credential helpers

pub mod jwt;
pub mod middleware;
pub mod session;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, SessionToken};
pub use middleware::require_auth;

/// Role carried by every admin session
pub const ADMIN_ROLE: &str = "admin";
