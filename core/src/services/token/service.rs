//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying authorization tokens.
///
/// Signing is symmetric (HS256); the keys are derived once from the
/// configured secret and reused for every call.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for the given account
    ///
    /// # Returns
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, self.config.ttl_secs, self.config.issuer.clone());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token's signature, expiry, and issuer, returning its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - The verified claims
    /// * `Err(DomainError)` - Expired or otherwise invalid token
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            },
        )?;

        Ok(token_data.claims)
    }
}
