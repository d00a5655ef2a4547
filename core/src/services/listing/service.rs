//! Main listing service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use cv_shared::validation::is_present;

use crate::domain::entities::listing::{split_tags, Listing};
use crate::domain::value_objects::ListingUpdate;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ListingRepository;
use crate::services::storage::ImageStore;

use super::config::ListingServiceConfig;

/// Service managing one user's car listings.
///
/// Every operation takes the authenticated owner's id and stays inside that
/// owner's slice of the catalog; a listing owned by someone else looks
/// exactly like a missing one.
pub struct ListingService<L: ListingRepository, S: ImageStore> {
    listing_repository: Arc<L>,
    image_store: Arc<S>,
    config: ListingServiceConfig,
}

impl<L, S> ListingService<L, S>
where
    L: ListingRepository,
    S: ImageStore,
{
    /// Creates a new listing service
    pub fn new(
        listing_repository: Arc<L>,
        image_store: Arc<S>,
        config: ListingServiceConfig,
    ) -> Self {
        Self {
            listing_repository,
            image_store,
            config,
        }
    }

    /// Creates a listing, uploading any provided image payloads first.
    ///
    /// Uploads run sequentially and abort on the first failure; in that case
    /// nothing is persisted. Assets uploaded before the failure stay on the
    /// provider.
    pub async fn create(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        tags_text: &str,
        image_payloads: &[String],
    ) -> DomainResult<Listing> {
        if !is_present(title) {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            }
            .into());
        }

        let images = self.upload_all(image_payloads).await?;
        let listing = Listing::new(owner_id, title, description, split_tags(tags_text), images);

        let stored = self.listing_repository.create(listing).await?;
        info!(listing_id = %stored.id, images = stored.images.len(), "listing created");
        Ok(stored)
    }

    /// Fetches one owned listing
    pub async fn get(&self, owner_id: Uuid, id: Uuid) -> DomainResult<Listing> {
        self.listing_repository
            .find_by_id(owner_id, id)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// Enumerates owned listings, newest first
    pub async fn list(&self, owner_id: Uuid, limit: Option<u32>) -> DomainResult<Vec<Listing>> {
        let limit = limit
            .unwrap_or(self.config.default_list_limit)
            .min(self.config.max_list_limit);

        self.listing_repository.find_all(owner_id, limit).await
    }

    /// Applies a partial update; omitted fields keep their stored values.
    ///
    /// When the client sends a kept-URL list it replaces the gallery, and
    /// freshly uploaded `new_images` are appended after it. URLs dropped
    /// from the gallery are not deleted from the provider; only listing
    /// deletion cleans up assets.
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: ListingUpdate,
    ) -> DomainResult<Listing> {
        let mut listing = self.get(owner_id, id).await?;

        if let Some(title) = changes.title {
            listing.title = title;
        }
        if let Some(description) = changes.description {
            listing.description = description;
        }
        if let Some(tags_text) = changes.tags_text {
            listing.tags = split_tags(&tags_text);
        }
        if let Some(kept) = changes.kept_images {
            listing.images = kept;
        }

        let new_urls = self.upload_all(&changes.new_images).await?;
        listing.images.extend(new_urls);
        listing.touch();

        self.listing_repository.update(listing).await
    }

    /// Deletes a listing, then best-effort deletes its image assets.
    ///
    /// The record goes first so a dead provider can never block deletion;
    /// each asset is attempted exactly once and failures are only logged.
    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> DomainResult<Listing> {
        let deleted = self
            .listing_repository
            .delete(owner_id, id)
            .await?
            .ok_or_else(Self::not_found)?;

        for url in &deleted.images {
            if let Err(e) = self.image_store.delete(url).await {
                warn!(listing_id = %deleted.id, url = %url, error = %e, "image cleanup failed");
            }
        }

        info!(listing_id = %deleted.id, "listing deleted");
        Ok(deleted)
    }

    /// Searches the owner's listings by case-insensitive keyword
    pub async fn search(&self, owner_id: Uuid, keyword: &str) -> DomainResult<Vec<Listing>> {
        self.listing_repository.search(owner_id, keyword).await
    }

    async fn upload_all(&self, payloads: &[String]) -> DomainResult<Vec<String>> {
        let mut urls = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let url = self
                .image_store
                .upload(payload, &self.config.upload_options)
                .await?;
            urls.push(url);
        }
        Ok(urls)
    }

    fn not_found() -> DomainError {
        DomainError::NotFound {
            resource: "Listing".to_string(),
        }
    }
}
