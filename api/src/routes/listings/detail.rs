use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::error::ApiError;
use crate::middleware::auth::Identity;
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;

/// Handler for GET /api/listings/{id}
///
/// # Responses
/// - 200 OK: the listing
/// - 404 Not Found: absent or owned by another user
pub async fn get_listing<U, L, S>(
    identity: Identity,
    state: web::Data<AppState<U, L, S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    let listing = state
        .listing_service
        .get(identity.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(listing))
}
