//! JWT 令牌服务
//!
//! Issues and validates the admin session token.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum secret length accepted in production
pub const MIN_SECRET_LEN: usize = 32;

/// JWT 配置
#[derive(Clone)]
pub struct JwtConfig {
    /// Signing secret
    pub secret: String,
    /// Session lifetime (minutes)
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_minutes", &self.expiration_minutes)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl Default for JwtConfig {
    /// Development config with a freshly generated secret
    fn default() -> Self {
        Self {
            secret: generate_secure_printable_jwt_secret(),
            expiration_minutes: 720,
            issuer: "petitute".to_string(),
            audience: "petitute-admin".to_string(),
        }
    }
}

impl JwtConfig {
    /// Load the signing secret from `SECRET_KEY`.
    ///
    /// In production the variable is required and must be at least
    /// [`MIN_SECRET_LEN`] characters. In development a missing key is replaced
    /// by a random one (sessions then do not survive a restart).
    pub fn from_env(production: bool, expiration_minutes: i64) -> Result<Self, JwtError> {
        let secret = match std::env::var("SECRET_KEY") {
            Ok(secret) if secret.len() >= MIN_SECRET_LEN => secret,
            Ok(_) if production => {
                return Err(JwtError::ConfigError(format!(
                    "SECRET_KEY must be at least {MIN_SECRET_LEN} characters long"
                )));
            }
            Ok(secret) => {
                tracing::warn!("⚠️  SECRET_KEY is shorter than {MIN_SECRET_LEN} characters");
                secret
            }
            Err(_) if production => {
                return Err(JwtError::ConfigError(
                    "SECRET_KEY environment variable must be set in production!".to_string(),
                ));
            }
            Err(_) => {
                tracing::warn!("⚠️  SECRET_KEY not set! Generating temporary key for development.");
                generate_secure_printable_jwt_secret()
            }
        };

        Ok(Self {
            secret,
            expiration_minutes,
            ..Self::default()
        })
    }
}

/// 存储在令牌中的 JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the admin username)
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Expiry (Unix seconds)
    pub exp: i64,
    /// Issued at (Unix seconds)
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generate a 64-character printable secret
pub fn generate_secure_printable_jwt_secret() -> String {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    if rng.fill(&mut bytes).is_err() {
        // Only reachable when the OS RNG is unavailable
        return "PetituteDevelopmentSessionKey-ReplaceInProduction!".to_string();
    }

    bytes
        .iter()
        .map(|b| ALLOWED[(*b as usize) % ALLOWED.len()] as char)
        .collect()
}

/// A freshly issued session token
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    /// Expiry (Unix seconds)
    pub expires_at: i64,
}

/// JWT 令牌服务
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("expiration_minutes", &self.config.expiration_minutes)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a session token
    pub fn generate_token(&self, username: &str, role: &str) -> Result<SessionToken, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: username.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))?;

        Ok(SessionToken {
            token,
            expires_at: claims.exp,
        })
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// 当前用户上下文 (从 JWT Claims 解析)
///
/// Inserted into request extensions by `require_auth`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
    pub role: String,
    /// Session expiry (Unix seconds)
    pub expires_at: i64,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
            expires_at: claims.exp,
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == super::ADMIN_ROLE
    }
}
