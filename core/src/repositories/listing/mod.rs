//! Listing repository module.

mod r#trait;
pub use r#trait::ListingRepository;

mod mock;
pub use mock::MockListingRepository;
