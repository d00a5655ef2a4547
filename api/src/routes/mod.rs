//! HTTP route handlers
//!
//! Grouped by resource: authentication endpoints and the listing catalog.

pub mod auth;
pub mod listings;

use std::sync::Arc;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::auth::AuthService;
use cv_core::services::listing::ListingService;
use cv_core::services::storage::ImageStore;
use cv_core::services::token::TokenService;

/// Application state that holds shared services
pub struct AppState<U, L, S>
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    pub auth_service: Arc<AuthService<U>>,
    pub listing_service: Arc<ListingService<L, S>>,
    pub token_service: Arc<TokenService>,
}
