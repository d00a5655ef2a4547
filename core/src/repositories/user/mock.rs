//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::UserAccount;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// In-memory user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, UserAccount>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: UserAccount) -> Result<UserAccount, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(AuthError::UsernameTaken.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
