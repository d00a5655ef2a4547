//! Mock implementation of ListingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

use super::r#trait::ListingRepository;

/// In-memory listing repository for testing.
///
/// Mirrors the MySQL implementation's semantics, including owner scoping
/// and newest-first ordering.
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MockListingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn sort_newest_first(mut listings: Vec<Listing>) -> Vec<Listing> {
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings
            .get(&id)
            .filter(|l| l.owner_id == owner_id)
            .cloned())
    }

    async fn find_all(&self, owner_id: Uuid, limit: u32) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        let owned: Vec<Listing> = listings
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();

        let mut sorted = Self::sort_newest_first(owned);
        sorted.truncate(limit as usize);
        Ok(sorted)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;

        match listings.get(&listing.id) {
            Some(stored) if stored.owner_id == listing.owner_id => {
                listings.insert(listing.id, listing.clone());
                Ok(listing)
            }
            _ => Err(DomainError::NotFound {
                resource: "Listing".to_string(),
            }),
        }
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let mut listings = self.listings.write().await;

        match listings.get(&id) {
            Some(stored) if stored.owner_id == owner_id => Ok(listings.remove(&id)),
            _ => Ok(None),
        }
    }

    async fn search(&self, owner_id: Uuid, keyword: &str) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        let matching: Vec<Listing> = listings
            .values()
            .filter(|l| l.owner_id == owner_id && l.matches_keyword(keyword))
            .cloned()
            .collect();

        Ok(Self::sort_newest_first(matching))
    }
}
