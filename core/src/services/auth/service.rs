//! Main authentication service implementation

use std::sync::Arc;

use bcrypt::{hash, verify};
use tracing::{info, warn};

use cv_shared::validation::{is_present, is_valid_username};

use crate::domain::entities::user::UserAccount;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service handling signup and login
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Registers a new account.
    ///
    /// Steps:
    /// 1. Validate that username and password are present and well formed
    /// 2. Reject usernames that are already registered
    /// 3. Hash the password with bcrypt at the configured cost
    /// 4. Persist the account
    ///
    /// The plaintext password is dropped as soon as the digest exists; it is
    /// never stored or logged.
    pub async fn signup(&self, username: &str, password: &str) -> DomainResult<UserAccount> {
        if !is_present(username) {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if !is_present(password) {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }
        if !is_valid_username(username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }

        if self
            .user_repository
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash = hash(password, self.config.bcrypt_cost).map_err(|e| {
            DomainError::Internal {
                message: format!("password hashing failed: {e}"),
            }
        })?;

        let account = self
            .user_repository
            .create(UserAccount::new(username, password_hash))
            .await?;

        info!(user_id = %account.id, "new account registered");
        Ok(account)
    }

    /// Verifies credentials and issues an authorization token.
    ///
    /// Unknown usernames and wrong passwords produce the same error, so the
    /// response never reveals which half was wrong.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<String> {
        let account = match self.user_repository.find_by_username(username).await? {
            Some(account) => account,
            None => {
                warn!("login attempt for unknown username");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let password_matches =
            verify(password, &account.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {e}"),
            })?;

        if !password_matches {
            warn!(user_id = %account.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.token_service.issue(account.id)
    }
}
