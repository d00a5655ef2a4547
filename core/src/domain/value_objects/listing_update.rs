//! Partial update carrier for listings.

/// Field changes for a listing update.
///
/// Each `None` preserves the stored value; a `Some` replaces it. The image
/// gallery is replaced by `kept_images` when present, then any `new_images`
/// payloads are uploaded and appended after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingUpdate {
    /// Replacement title
    pub title: Option<String>,

    /// Replacement description
    pub description: Option<String>,

    /// Replacement tag text, re-split on commas when present
    pub tags_text: Option<String>,

    /// Delivery URLs to keep, replacing the stored image list
    pub kept_images: Option<Vec<String>>,

    /// New image payloads to upload and append after the kept list
    pub new_images: Vec<String>,
}

impl ListingUpdate {
    /// An update that changes nothing
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_has_no_changes() {
        let update = ListingUpdate::empty();
        assert!(update.title.is_none());
        assert!(update.kept_images.is_none());
        assert!(update.new_images.is_empty());
    }
}
