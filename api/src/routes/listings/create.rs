use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::listing::CreateListingRequest;
use crate::handlers::error::ApiError;
use crate::middleware::auth::Identity;
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;

/// Handler for POST /api/listings
///
/// Creates a listing for the authenticated user. Image payloads are uploaded
/// to the storage provider one by one before anything is persisted; the
/// first upload failure aborts the request.
///
/// # Request Body
///
/// ```json
/// {
///     "title": "2014 Outback",
///     "description": "One owner, highway miles",
///     "tags": "wagon, awd",
///     "images": ["data:image/jpeg;base64,..."]
/// }
/// ```
///
/// # Responses
/// - 201 Created: the stored listing
/// - 400 Bad Request: missing title
/// - 502 Bad Gateway: provider rejected an upload
pub async fn create_listing<U, L, S>(
    identity: Identity,
    state: web::Data<AppState<U, L, S>>,
    request: web::Json<CreateListingRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    request.validate()?;
    let body = request.into_inner();

    let listing = state
        .listing_service
        .create(
            identity.user_id,
            &body.title,
            body.description.as_deref().unwrap_or(""),
            body.tags.as_deref().unwrap_or(""),
            &body.images.unwrap_or_default(),
        )
        .await?;

    Ok(HttpResponse::Created().json(listing))
}
