//! Authorization token configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Signing configuration for stateless authorization tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Token lifetime in seconds
    pub ttl_secs: i64,

    /// Issuer claim embedded in every token
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            ttl_secs: 86400, // 24 hours
            issuer: String::from("carvault"),
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let ttl_secs = std::env::var("JWT_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);

        Self {
            secret,
            ttl_secs,
            ..Default::default()
        }
    }

    /// Set the token lifetime in hours
    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.ttl_secs = hours * 3600;
        self
    }

    /// Check if using the default secret (security warning at startup)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.ttl_secs, 86400);
        assert_eq!(config.issuer, "carvault");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_token_config_builder() {
        let config = TokenConfig::new("my-secret").with_ttl_hours(2);
        assert_eq!(config.ttl_secs, 7200);
        assert!(!config.is_using_default_secret());
    }
}
