//! Business services orchestrating the domain.

pub mod auth;
pub mod listing;
pub mod storage;
pub mod token;

pub use auth::{AuthService, AuthServiceConfig};
pub use listing::{ListingService, ListingServiceConfig};
pub use storage::{ImageStore, MockImageStore, UploadOptions};
pub use token::{TokenService, TokenServiceConfig};
