//! Petitute Server - 宠物寄养 / 美容店管理后台
//!
//! # 模块结构
//!
//! ```text
//! petitute-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 会话令牌、认证中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 预约业务逻辑
//! ├── pricing/       # 价格、会员折扣
//! ├── db/            # SQLite 连接池、仓储、种子数据
//! └── utils/         # 日志、校验、时间解析
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod messages;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 认证相关事件 (target: "security")
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and set up logging from `LOG_LEVEL` (default `info`) and
/// `LOG_DIR` (optional daily rolling file)
pub fn setup_environment() {
    let _ = dotenvy::dotenv();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    init_logger_with_file(&level, log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____       __  _ __        __
   / __ \___  / /_(_) /___  __/ /____
  / /_/ / _ \/ __/ / __/ / / / __/ _ \
 / ____/  __/ /_/ / /_/ /_/ / /_/  __/
/_/    \___/\__/_/\__/\__,_/\__/\___/
    "#
    );
}
