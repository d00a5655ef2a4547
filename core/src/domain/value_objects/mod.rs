//! Value objects representing immutable domain concepts.

pub mod listing_update;

// Re-export commonly used types
pub use listing_update::ListingUpdate;
