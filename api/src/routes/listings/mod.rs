//! Listing catalog route handlers
//!
//! Owner-scoped CRUD plus keyword search. Every handler takes the `Identity`
//! placed by the auth gate; a listing owned by another user is
//! indistinguishable from a missing one.

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod search;
pub mod update;

pub use create::create_listing;
pub use delete::delete_listing;
pub use detail::get_listing;
pub use list::list_listings;
pub use search::search_listings;
pub use update::update_listing;
