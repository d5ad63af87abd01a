//! Session DTOs shared by the server and API clients

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Local path to continue to after login
    #[serde(default)]
    pub next: Option<String>,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub session: SessionInfo,
    /// Where the client should go next (always a local path)
    pub redirect: String,
}

/// Session information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
    pub role: String,
    /// Expiry (Unix seconds)
    pub expires_at: i64,
}
