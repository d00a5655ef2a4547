use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::SignupRequest;
use crate::handlers::error::ApiError;
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;
use cv_shared::types::Confirmation;

/// Handler for POST /api/signup
///
/// Registers a new account. The password is hashed before it is stored;
/// the plaintext never leaves this request.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "drives_a_lot",
///     "password": "hunter2hunter2"
/// }
/// ```
///
/// # Responses
/// - 201 Created: `{"message": "User created successfully"}`
/// - 400 Bad Request: malformed username/password or duplicate username
pub async fn signup<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    request.validate()?;

    state
        .auth_service
        .signup(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(Confirmation::new("User created successfully")))
}
