//! Claims carried by stateless authorization tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer embedded in every token this service signs
pub const JWT_ISSUER: &str = "carvault";

/// Default token lifetime in seconds (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

/// JWT claims for an authorization token.
///
/// Verification is stateless: everything needed to authorize a request is
/// inside the token, nothing is looked up in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account id as a string
    pub sub: String,

    /// Issued-at time, epoch seconds
    pub iat: i64,

    /// Expiry time, epoch seconds
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for the given account, valid for `ttl_secs` from now
    pub fn new(user_id: Uuid, ttl_secs: i64, issuer: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            iat: now,
            exp: now + ttl_secs,
            iss: issuer.into(),
        }
    }

    /// Parses the subject back into an account id
    pub fn subject(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Whether the expiry has passed
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}
