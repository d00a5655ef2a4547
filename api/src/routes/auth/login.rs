use actix_web::{web, HttpResponse};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;

/// Handler for POST /api/login
///
/// Verifies the credentials and returns a signed token for the Authorization
/// header of subsequent requests.
///
/// # Responses
/// - 200 OK: `{"token": "..."}`
/// - 401 Unauthorized: `{"error": "Invalid username or password"}` for any
///   credential failure, without revealing which part was wrong
pub async fn login<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    let token = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
