//! Domain entities representing core business objects.

pub mod listing;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use listing::{split_tags, Listing};
pub use token::{Claims, DEFAULT_TOKEN_TTL_SECS, JWT_ISSUER};
pub use user::UserAccount;
