use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for creating a listing.
///
/// `images` carries raw upload payloads (data URIs or remote URLs), not
/// delivery URLs; the server uploads them before persisting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1))]
    pub title: String,

    pub description: Option<String>,

    /// Comma-separated tag text, split verbatim server-side
    pub tags: Option<String>,

    pub images: Option<Vec<String>>,
}

/// Body for updating a listing; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateListingRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    pub tags: Option<String>,

    /// Delivery URLs to keep from the existing gallery
    pub images: Option<Vec<String>>,

    /// New upload payloads, appended after the kept URLs
    #[serde(rename = "newImages")]
    pub new_images: Option<Vec<String>>,
}

/// Query parameters for the listing index
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

/// Query parameters for keyword search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}
