//! Application factory
//!
//! Builds the Actix-web application: route table, middleware stack, payload
//! limits, and the error shape for malformed requests.

use std::sync::Arc;

use actix_web::error::InternalError;
use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::AuthGate;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, signup};
use crate::routes::listings::{
    create_listing, delete_listing, get_listing, list_listings, search_listings, update_listing,
};
use crate::routes::AppState;

use cv_core::repositories::{ListingRepository, UserRepository};
use cv_core::services::storage::ImageStore;
use cv_shared::types::ErrorBody;

/// Create and configure the application with all dependencies
///
/// `max_payload_size` bounds JSON bodies; image payloads travel inside them,
/// so this is effectively the upload size limit.
pub fn create_app<U, L, S>(
    app_state: web::Data<AppState<U, L, S>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    // Configure CORS for the current environment
    let cors = create_cors();

    // The gate shares the token service with the login handler
    let auth_gate = AuthGate::new(Arc::clone(&app_state.token_service));

    // Malformed payloads, query strings, and path segments all answer in
    // the same {"error": ...} shape as domain failures.
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(|err, _req| {
            let body = ErrorBody::new(err.to_string());
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let body = ErrorBody::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        let body = ErrorBody::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        .app_data(path_config)
        // Add middleware (order matters: CORS outermost, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                // Public auth endpoints
                .route("/signup", web::post().to(signup::<U, L, S>))
                .route("/login", web::post().to(login::<U, L, S>))
                // Listing catalog, guarded by the auth gate
                .service(
                    web::scope("/listings")
                        .wrap(auth_gate.clone())
                        .route("", web::post().to(create_listing::<U, L, S>))
                        .route("", web::get().to(list_listings::<U, L, S>))
                        .route("/{id}", web::get().to(get_listing::<U, L, S>))
                        .route("/{id}", web::put().to(update_listing::<U, L, S>))
                        .route("/{id}", web::delete().to(delete_listing::<U, L, S>)),
                )
                // Keyword search, also guarded
                .service(
                    web::scope("/search")
                        .wrap(auth_gate)
                        .route("", web::get().to(search_listings::<U, L, S>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "carvault-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("The requested resource was not found"))
}
