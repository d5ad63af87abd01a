//! Server State
//!
//! Shared by every handler; cheap to clone.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 不可变配置 |
/// | pool | SQLite 连接池 |
/// | jwt_service | 会话令牌服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Assemble state from an existing pool
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config: Arc::new(config),
            pool,
            jwt_service,
        }
    }

    /// Open the database file named in the config and run migrations
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db.pool))
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
