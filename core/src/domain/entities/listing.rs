//! Car listing entity and tag handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car offered for sale by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier for the listing
    pub id: Uuid,

    /// Account that owns this listing; every query is scoped to it
    pub owner_id: Uuid,

    /// Short sale title
    pub title: String,

    /// Free-form description, may be empty
    pub description: String,

    /// Ordered tags, split verbatim from the client's comma-separated text
    pub tags: Vec<String>,

    /// Ordered delivery URLs of the uploaded gallery images
    pub images: Vec<String>,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the listing was last modified
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Creates a new listing owned by the given account
    pub fn new(
        owner_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        images: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            description: description.into(),
            tags,
            images,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the listing as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match over title, description, and tags
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Splits client-supplied tag text on commas, verbatim.
///
/// No trimming or case folding is applied: `"suv, family"` becomes
/// `["suv", " family"]`. Empty input yields an empty list, not `[""]`.
pub fn split_tags(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(str::to_string).collect()
}
