//! MySQL implementation of the UserRepository trait.
//!
//! Persists user accounts with SQLx against the `users` table. Password
//! digests are stored as opaque strings; hashing happens in the core layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cv_core::domain::entities::UserAccount;
use cv_core::errors::{AuthError, DomainError};
use cv_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
///
/// Expected schema:
///
/// ```sql
/// CREATE TABLE users (
///     id            CHAR(36)     PRIMARY KEY,
///     username      VARCHAR(32)  NOT NULL UNIQUE,
///     password_hash VARCHAR(100) NOT NULL,
///     created_at    DATETIME(6)  NOT NULL
/// );
/// ```
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to UserAccount entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<UserAccount, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Database { message: format!("Failed to get id: {}", e) })?;

        Ok(UserAccount {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database { message: format!("Invalid UUID: {}", e) })?,
            username: row.try_get("username")
                .map_err(|e| DomainError::Database { message: format!("Failed to get username: {}", e) })?,
            password_hash: row.try_get("password_hash")
                .map_err(|e| DomainError::Database { message: format!("Failed to get password_hash: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database { message: format!("Failed to get created_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let query = r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
        "#;

        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Database query failed: {}", e) })?;

        match row {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: UserAccount) -> Result<UserAccount, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // The UNIQUE index on username is the authority on duplicates;
                // concurrent signups racing past the service-level check end here.
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AuthError::UsernameTaken.into()
                }
                _ => DomainError::Database { message: format!("Failed to create user: {}", e) },
            })?;

        Ok(user)
    }
}
