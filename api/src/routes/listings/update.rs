use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::listing::UpdateListingRequest;
use crate::handlers::error::ApiError;
use crate::middleware::auth::Identity;
use crate::routes::AppState;

use cv_core::domain::value_objects::ListingUpdate;
use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;

/// Handler for PUT /api/listings/{id}
///
/// Partial update: omitted fields keep their stored values. `images` (when
/// present) is the list of delivery URLs to keep; `newImages` payloads are
/// uploaded and appended after them.
///
/// # Responses
/// - 200 OK: the updated listing
/// - 404 Not Found: absent or owned by another user
/// - 502 Bad Gateway: provider rejected an upload
pub async fn update_listing<U, L, S>(
    identity: Identity,
    state: web::Data<AppState<U, L, S>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateListingRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    let body = request.into_inner();
    let changes = ListingUpdate {
        title: body.title,
        description: body.description,
        tags_text: body.tags,
        kept_images: body.images,
        new_images: body.new_images.unwrap_or_default(),
    };

    let listing = state
        .listing_service
        .update(identity.user_id, path.into_inner(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(listing))
}
