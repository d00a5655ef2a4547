//! Listing repository trait defining the interface for catalog persistence.
//!
//! Every operation here is owner-scoped: queries always filter on the owner
//! id (and the listing id where one applies), so one user's listings are
//! invisible to every other user. A listing that exists but belongs to
//! someone else is indistinguishable from one that does not exist.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

/// Repository trait for `Listing` persistence operations
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing, id already assigned
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Fetch one listing by id, scoped to its owner
    ///
    /// # Returns
    /// * `Ok(None)` when the listing is absent or owned by another account
    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// Enumerate the owner's listings, newest first, at most `limit` of them
    async fn find_all(&self, owner_id: Uuid, limit: u32) -> Result<Vec<Listing>, DomainError>;

    /// Overwrite the stored fields of a listing
    ///
    /// The predicate covers both the listing id and `listing.owner_id`.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` when no owned row was updated
    async fn update(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Delete one listing by id, scoped to its owner
    ///
    /// # Returns
    /// * `Ok(Some(Listing))` - the record as it was just before deletion,
    ///   so the caller can clean up its image assets
    /// * `Ok(None)` - nothing owned by `owner_id` had that id
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// Case-insensitive substring search over title, description, and tags,
    /// scoped to the owner's listings, newest first
    async fn search(&self, owner_id: Uuid, keyword: &str) -> Result<Vec<Listing>, DomainError>;
}
