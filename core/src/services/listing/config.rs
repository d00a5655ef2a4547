//! Configuration for the listing service

use crate::services::storage::UploadOptions;

/// Configuration for the listing service
#[derive(Debug, Clone)]
pub struct ListingServiceConfig {
    /// Listings returned when the caller does not ask for a limit
    pub default_list_limit: u32,

    /// Upper bound on the caller-supplied limit; larger requests clamp here
    pub max_list_limit: u32,

    /// Upload parameters for gallery images
    pub upload_options: UploadOptions,
}

impl Default for ListingServiceConfig {
    fn default() -> Self {
        Self {
            default_list_limit: 50,
            max_list_limit: 100,
            upload_options: UploadOptions::default(),
        }
    }
}
