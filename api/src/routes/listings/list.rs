use actix_web::{web, HttpResponse};

use crate::dto::listing::ListQuery;
use crate::handlers::error::ApiError;
use crate::middleware::auth::Identity;
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;

/// Handler for GET /api/listings
///
/// Returns the authenticated user's listings, newest first. `?limit=N`
/// bounds the result; it defaults to 50 and is capped server-side.
pub async fn list_listings<U, L, S>(
    identity: Identity,
    state: web::Data<AppState<U, L, S>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    let listings = state
        .listing_service
        .list(identity.user_id, query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(listings))
}
