use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use cv_api::app::create_app;
use cv_api::routes::AppState;
use cv_core::services::{
    AuthService, AuthServiceConfig, ListingService, ListingServiceConfig, TokenService,
    TokenServiceConfig,
};
use cv_infra::database::{DatabasePool, MySqlListingRepository, MySqlUserRepository};
use cv_infra::storage::CloudinaryStore;
use cv_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CarVault API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.token.is_using_default_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the built-in development secret");
    }

    // Database pool and connectivity probe
    let pool = DatabasePool::new(config.database.clone()).await?;
    pool.health_check().await?;
    info!("Database connection established");

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let listing_repository = Arc::new(MySqlListingRepository::new(pool.get_pool().clone()));

    // Image storage
    let image_store = Arc::new(CloudinaryStore::from_env()?);

    // Services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
        config.token.clone(),
    )));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        AuthServiceConfig::default(),
    ));
    let listing_service = Arc::new(ListingService::new(
        Arc::clone(&listing_repository),
        Arc::clone(&image_store),
        ListingServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        listing_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), max_payload_size))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
