use crate::auth::JwtConfig;
use shared::error::{AppError, ErrorCode};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT / PORT | 5000 | HTTP 服务端口 (PORT 优先) |
/// | DATABASE_PATH | petitute.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ADMIN_USER | admin | 管理员用户名 |
/// | ADMIN_PASS | admin123 | 管理员密码 |
/// | SECRET_KEY | (development: random) | 会话签名密钥, production 必填 (≥ 32) |
/// | SESSION_TTL_MINUTES | 720 | 会话有效期 (分钟) |
///
/// `LOG_LEVEL` / `LOG_DIR` are read earlier by [`crate::setup_environment`].
///
/// # 示例
///
/// ```ignore
/// PORT=8080 ADMIN_PASS=s3cret cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 运行环境: development | production
    pub environment: String,
    /// The single admin account
    pub admin: AdminCredential,
    /// Session token configuration
    pub jwt: JwtConfig,
}

/// Admin username / password pair
#[derive(Clone)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

const DEFAULT_HTTP_PORT: u16 = 5000;
const DEFAULT_SESSION_TTL_MINUTES: i64 = 720;

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。Fails only when the session secret is
    /// unusable in production.
    pub fn from_env() -> Result<Self, AppError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let production = environment == "production";

        let http_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .or_else(|| {
                std::env::var("HTTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
            })
            .unwrap_or(DEFAULT_HTTP_PORT);

        let session_ttl = std::env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_MINUTES);

        let jwt = JwtConfig::from_env(production, session_ttl)
            .map_err(|e| AppError::with_message(ErrorCode::ConfigError, e.to_string()))?;

        Ok(Self {
            http_port,
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "petitute.db".into()),
            environment,
            admin: AdminCredential {
                username: std::env::var("ADMIN_USER").unwrap_or_else(|_| "admin".into()),
                password: std::env::var("ADMIN_PASS").unwrap_or_else(|_| "admin123".into()),
            },
            jwt,
        })
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Session lifetime in seconds (cookie `Max-Age`)
    pub fn session_ttl_secs(&self) -> i64 {
        self.jwt.expiration_minutes * 60
    }
}

impl Default for Config {
    /// Development defaults without reading the environment (tests)
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            database_path: "petitute.db".to_string(),
            environment: "development".to_string(),
            admin: AdminCredential {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
            jwt: JwtConfig::default(),
        }
    }
}
