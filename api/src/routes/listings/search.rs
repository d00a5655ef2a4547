use actix_web::{web, HttpResponse};

use crate::dto::listing::SearchQuery;
use crate::handlers::error::ApiError;
use crate::middleware::auth::Identity;
use crate::routes::AppState;

use cv_core::errors::ValidationError;
use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;

/// Handler for GET /api/search?keyword=K
///
/// Case-insensitive substring search over the authenticated user's listings:
/// title, description, and tags all match. The parameter is required; an
/// empty value matches everything.
pub async fn search_listings<U, L, S>(
    identity: Identity,
    state: web::Data<AppState<U, L, S>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    let keyword = match query.keyword.as_deref() {
        Some(keyword) => keyword,
        None => {
            return Err(ApiError::new(
                ValidationError::RequiredField {
                    field: "keyword".to_string(),
                }
                .into(),
            ))
        }
    };

    let listings = state
        .listing_service
        .search(identity.user_id, keyword)
        .await?;

    Ok(HttpResponse::Ok().json(listings))
}
