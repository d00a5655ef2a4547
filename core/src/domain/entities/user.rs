//! User account entity representing a registered user of the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account identified by a unique username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Username chosen at signup, unique across the system
    pub username: String,

    /// Bcrypt digest of the password. Never serialized and never logged;
    /// the plaintext exists only transiently during signup and login.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Creates a new account from a username and a previously computed
    /// password digest
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_creation() {
        let account = UserAccount::new("alice", "$2b$10$somedigest");

        assert_eq!(account.username, "alice");
        assert_eq!(account.password_hash, "$2b$10$somedigest");
        assert!(account.created_at <= Utc::now());
    }

    #[test]
    fn test_accounts_get_distinct_ids() {
        let a = UserAccount::new("alice", "hash-a");
        let b = UserAccount::new("bob", "hash-b");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let account = UserAccount::new("alice", "$2b$10$somedigest");
        let json = serde_json::to_value(&account).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
