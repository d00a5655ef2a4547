use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::error::ApiError;
use crate::middleware::auth::Identity;
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;
use cv_shared::types::Confirmation;

/// Handler for DELETE /api/listings/{id}
///
/// Removes the listing, then best-effort deletes its images from the
/// provider. Provider failures never turn a completed delete into an error.
///
/// # Responses
/// - 200 OK: `{"message": "Listing deleted successfully"}`
/// - 404 Not Found: absent or owned by another user
pub async fn delete_listing<U, L, S>(
    identity: Identity,
    state: web::Data<AppState<U, L, S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    state
        .listing_service
        .delete(identity.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(Confirmation::new("Listing deleted successfully")))
}
