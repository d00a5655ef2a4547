//! MySQL repository implementations

pub mod listing_repository;
pub mod user_repository;

pub use listing_repository::MySqlListingRepository;
pub use user_repository::MySqlUserRepository;
