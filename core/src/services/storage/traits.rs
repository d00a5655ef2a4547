//! Image storage abstraction

use async_trait::async_trait;

use crate::errors::StorageError;

/// Upload parameters forwarded to the storage provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Target folder on the provider
    pub folder: String,

    /// Bounding-box edge in pixels; the provider scales oversized images
    /// down to fit without cropping
    pub max_dimension: u32,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            folder: "car_images".to_string(),
            max_dimension: 500,
        }
    }
}

/// Port to the external image storage provider
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload one image payload (data URI, base64 body, or remote URL,
    /// passed through opaquely)
    ///
    /// # Returns
    /// * `Ok(String)` - The HTTPS delivery URL of the stored asset
    async fn upload(&self, payload: &str, options: &UploadOptions) -> Result<String, StorageError>;

    /// Delete the asset referenced by a delivery URL.
    ///
    /// Implementations treat a provider-side "not found" as success so the
    /// call stays idempotent.
    async fn delete(&self, url: &str) -> Result<(), StorageError>;
}
