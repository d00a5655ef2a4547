//! Integration tests for signup, login, and the public app surface

use std::sync::Arc;

use actix_web::{http::header, test, web};
use serde_json::{json, Value};

use cv_api::app::create_app;
use cv_api::routes::AppState;
use cv_core::repositories::{MockListingRepository, MockUserRepository};
use cv_core::services::storage::MockImageStore;
use cv_core::services::{
    AuthService, AuthServiceConfig, ListingService, ListingServiceConfig, TokenService,
    TokenServiceConfig,
};

const MAX_PAYLOAD: usize = 10 * 1024 * 1024;

type MockState = AppState<MockUserRepository, MockListingRepository, MockImageStore>;

fn test_state() -> web::Data<MockState> {
    let user_repository = Arc::new(MockUserRepository::new());
    let listing_repository = Arc::new(MockListingRepository::new());
    let image_store = Arc::new(MockImageStore::new());

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));
    // Low bcrypt cost keeps password hashing fast in tests
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        AuthServiceConfig { bcrypt_cost: 4 },
    ));
    let listing_service = Arc::new(ListingService::new(
        listing_repository,
        image_store,
        ListingServiceConfig::default(),
    ));

    web::Data::new(AppState {
        auth_service,
        listing_service,
        token_service,
    })
}

/// Dispatches a request whose rejection may originate in the auth gate.
///
/// Gate rejections leave the app as service-level errors; a real server
/// renders them through `ResponseError` on the wire, but `call_service`
/// panics on them, so the conversion is applied here instead.
async fn call_rendered<S, B>(
    app: &S,
    req: actix_http::Request,
) -> actix_web::dev::ServiceResponse<actix_web::body::BoxBody>
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody + 'static,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => resp.map_into_boxed_body(),
        Err(err) => actix_web::dev::ServiceResponse::new(
            test::TestRequest::default().to_http_request(),
            actix_web::HttpResponse::from_error(err),
        ),
    }
}

#[actix_web::test]
async fn test_signup_creates_account() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_json(json!({"username": "alice", "password": "hunter22"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");
}

#[actix_web::test]
async fn test_signup_rejects_duplicate_username() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_json(json!({"username": "alice", "password": "hunter22"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // Same username again, different password
    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_json(json!({"username": "alice", "password": "other-pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Username already exists");
}

#[actix_web::test]
async fn test_signup_rejects_short_username() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_json(json!({"username": "ab", "password": "hunter22"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid format: username");
}

#[actix_web::test]
async fn test_login_issues_token_that_passes_the_gate() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_json(json!({"username": "alice", "password": "hunter22"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": "alice", "password": "hunter22"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token in login response");
    assert!(!token.is_empty());

    // The raw token is accepted without a Bearer prefix
    let req = test::TestRequest::get()
        .uri("/api/listings")
        .insert_header((header::AUTHORIZATION, token.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let listings: Value = test::read_body_json(resp).await;
    assert_eq!(listings, json!([]));
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_json(json!({"username": "alice", "password": "hunter22"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": "alice", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let wrong_password: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": "nobody", "password": "hunter22"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let unknown_user: Value = test::read_body_json(resp).await;

    assert_eq!(wrong_password["error"], "Invalid username or password");
    assert_eq!(unknown_user, wrong_password);
}

#[actix_web::test]
async fn test_expired_token_is_rejected_as_invalid() {
    let state = test_state();
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    // Same secret and issuer as the app, but a lifetime in the past
    let expired_issuer = TokenService::new(TokenServiceConfig {
        ttl_secs: -3600,
        ..TokenServiceConfig::default()
    });
    let token = expired_issuer.issue(uuid::Uuid::new_v4()).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/listings")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = call_rendered(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid token");
}

#[actix_web::test]
async fn test_malformed_login_payload_gets_json_error_body() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}

#[actix_web::test]
async fn test_health_endpoint_is_public() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "carvault-api");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::get().uri("/api/garage").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "The requested resource was not found");
}
