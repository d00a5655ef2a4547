//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain and infrastructure layers: implementations own the actual storage
//! access, the domain only sees accounts and domain errors.

use async_trait::async_trait;

use crate::domain::entities::user::UserAccount;
use crate::errors::DomainError;

/// Repository trait for `UserAccount` persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by its unique username
    ///
    /// # Arguments
    /// * `username` - The exact username chosen at signup
    ///
    /// # Returns
    /// * `Ok(Some(UserAccount))` - Account found
    /// * `Ok(None)` - No account with that username
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError>;

    /// Persist a new account
    ///
    /// Username uniqueness is enforced here as well as at the service level:
    /// a storage-level duplicate must surface as
    /// [`AuthError::UsernameTaken`](crate::errors::AuthError::UsernameTaken)
    /// so concurrent signups cannot race past the pre-check.
    ///
    /// # Arguments
    /// * `user` - The account to store, id already assigned
    ///
    /// # Returns
    /// * `Ok(UserAccount)` - The stored account
    /// * `Err(DomainError)` - Duplicate username or storage error
    async fn create(&self, user: UserAccount) -> Result<UserAccount, DomainError>;
}
