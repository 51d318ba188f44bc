use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::auth::jwt::DEFAULT_TOKEN_TTL_MINUTES;

/// Application configuration loaded from environment variables
///
/// The core never reads the environment itself; the server binary loads this
/// once and injects the individual values.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub access_token_expire_minutes: i64,
    pub allowed_origin: Option<String>,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET")
                .ok()
                .filter(|s| !s.is_empty())
                .context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "leads".to_string()),
            access_token_expire_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_MINUTES.to_string())
                .parse()
                .context("ACCESS_TOKEN_EXPIRE_MINUTES must be a valid number")?,
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .map(|s| s.parse())
                .transpose()
                .context("BCRYPT_COST must be a valid number")?
                .unwrap_or(bcrypt::DEFAULT_COST),
        })
    }

    pub fn access_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_expire_minutes)
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("database_max_connections", &self.database_max_connections)
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("allowed_origin", &self.allowed_origin)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
