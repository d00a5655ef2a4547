//! MySQL implementation of the ListingRepository trait.
//!
//! Persists car listings with SQLx. The `tags` and `images` collections are
//! stored as JSON-encoded TEXT columns; keyword search runs server-side with
//! escaped LIKE patterns so user input never acts as a wildcard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cv_core::domain::entities::Listing;
use cv_core::errors::DomainError;
use cv_core::repositories::ListingRepository;

/// MySQL implementation of ListingRepository
///
/// Expected schema:
///
/// ```sql
/// CREATE TABLE listings (
///     id          CHAR(36)     PRIMARY KEY,
///     user_id     CHAR(36)     NOT NULL,
///     title       VARCHAR(255) NOT NULL,
///     description TEXT         NOT NULL,
///     tags        TEXT         NOT NULL,
///     images      TEXT         NOT NULL,
///     created_at  DATETIME(6)  NOT NULL,
///     updated_at  DATETIME(6)  NOT NULL,
///     INDEX idx_listings_user_created (user_id, created_at)
/// );
/// ```
pub struct MySqlListingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlListingRepository {
    /// Create a new MySQL listing repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Encode a string collection for a JSON TEXT column
    fn encode(values: &[String]) -> Result<String, DomainError> {
        serde_json::to_string(values)
            .map_err(|e| DomainError::Database { message: format!("Failed to encode column: {}", e) })
    }

    /// Build a lowercased LIKE pattern with wildcard characters escaped
    ///
    /// MySQL treats `%`, `_` and the escape character itself specially inside
    /// LIKE patterns, so all three are escaped before wrapping in `%...%`.
    fn like_pattern(keyword: &str) -> String {
        let escaped = keyword
            .to_lowercase()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    }

    /// Convert database row to Listing entity
    fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<Listing, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Database { message: format!("Failed to get id: {}", e) })?;

        let user_id: String = row.try_get("user_id")
            .map_err(|e| DomainError::Database { message: format!("Failed to get user_id: {}", e) })?;

        let tags: String = row.try_get("tags")
            .map_err(|e| DomainError::Database { message: format!("Failed to get tags: {}", e) })?;

        let images: String = row.try_get("images")
            .map_err(|e| DomainError::Database { message: format!("Failed to get images: {}", e) })?;

        Ok(Listing {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database { message: format!("Invalid listing UUID: {}", e) })?,
            owner_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Database { message: format!("Invalid owner UUID: {}", e) })?,
            title: row.try_get("title")
                .map_err(|e| DomainError::Database { message: format!("Failed to get title: {}", e) })?,
            description: row.try_get("description")
                .map_err(|e| DomainError::Database { message: format!("Failed to get description: {}", e) })?,
            tags: serde_json::from_str(&tags)
                .map_err(|e| DomainError::Database { message: format!("Invalid tags payload: {}", e) })?,
            images: serde_json::from_str(&images)
                .map_err(|e| DomainError::Database { message: format!("Invalid images payload: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let query = r#"
            INSERT INTO listings (
                id, user_id, title, description, tags, images,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(listing.id.to_string())
            .bind(listing.owner_id.to_string())
            .bind(&listing.title)
            .bind(&listing.description)
            .bind(Self::encode(&listing.tags)?)
            .bind(Self::encode(&listing.images)?)
            .bind(listing.created_at)
            .bind(listing.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Failed to create listing: {}", e) })?;

        Ok(listing)
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, description, tags, images, created_at, updated_at
            FROM listings
            WHERE id = ? AND user_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Database query failed: {}", e) })?;

        match row {
            Some(row) => Ok(Some(Self::row_to_listing(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, owner_id: Uuid, limit: u32) -> Result<Vec<Listing>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, description, tags, images, created_at, updated_at
            FROM listings
            WHERE user_id = ?
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Database query failed: {}", e) })?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let query = r#"
            UPDATE listings SET
                title = ?,
                description = ?,
                tags = ?,
                images = ?,
                updated_at = ?
            WHERE id = ? AND user_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&listing.title)
            .bind(&listing.description)
            .bind(Self::encode(&listing.tags)?)
            .bind(Self::encode(&listing.images)?)
            .bind(listing.updated_at)
            .bind(listing.id.to_string())
            .bind(listing.owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Failed to update listing: {}", e) })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Listing".to_string(),
            });
        }

        Ok(listing)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Listing>, DomainError> {
        // Fetch first so the caller gets the record back for image cleanup.
        let listing = match self.find_by_id(owner_id, id).await? {
            Some(listing) => listing,
            None => return Ok(None),
        };

        let query = r#"
            DELETE FROM listings
            WHERE id = ? AND user_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Failed to delete listing: {}", e) })?;

        // Row vanished between the lookup and the delete.
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(listing))
    }

    async fn search(&self, owner_id: Uuid, keyword: &str) -> Result<Vec<Listing>, DomainError> {
        let pattern = Self::like_pattern(keyword);

        let query = r#"
            SELECT id, user_id, title, description, tags, images, created_at, updated_at
            FROM listings
            WHERE user_id = ?
              AND (LOWER(title) LIKE ? OR LOWER(description) LIKE ? OR LOWER(tags) LIKE ?)
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database { message: format!("Database query failed: {}", e) })?;

        rows.iter().map(Self::row_to_listing).collect()
    }
}
