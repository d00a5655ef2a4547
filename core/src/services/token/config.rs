//! Configuration for the token service

use cv_shared::config::TokenConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_TTL_SECS, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub ttl_secs: i64,
    /// Issuer claim embedded in and required of every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<TokenConfig> for TokenServiceConfig {
    fn from(config: TokenConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            ttl_secs: config.ttl_secs,
            issuer: config.issuer,
        }
    }
}
