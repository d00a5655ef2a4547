//! Integration tests for keyword search over the owner's catalog

use std::sync::Arc;

use actix_web::{http::header, test, web};
use serde_json::{json, Value};
use uuid::Uuid;

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

async fn create_listing<S, B>(app: &S, token: &str, body: Value)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/listings")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);
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
async fn test_search_matches_tags_case_insensitively() {
    let state = test_state();
    let token = state.token_service.issue(Uuid::new_v4()).unwrap();
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    create_listing(
        &app,
        &token,
        json!({"title": "Family car", "tags": "Sedan,Blue"}),
    )
    .await;
    create_listing(&app, &token, json!({"title": "Dirt bike"})).await;

    let req = test::TestRequest::get()
        .uri("/api/search?keyword=sedan")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Family car");
}

#[actix_web::test]
async fn test_search_matches_title_and_description() {
    let state = test_state();
    let token = state.token_service.issue(Uuid::new_v4()).unwrap();
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    create_listing(
        &app,
        &token,
        json!({"title": "2014 HONDA Civic", "description": "One owner, garage kept"}),
    )
    .await;

    for keyword in ["honda", "garage"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/search?keyword={}", keyword))
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body.as_array().unwrap().len(), 1, "keyword {:?}", keyword);
    }

    let req = test::TestRequest::get()
        .uri("/api/search?keyword=truck")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_search_requires_keyword() {
    let state = test_state();
    let token = state.token_service.issue(Uuid::new_v4()).unwrap();
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    let req = test::TestRequest::get()
        .uri("/api/search")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Required field: keyword");
}

#[actix_web::test]
async fn test_search_is_owner_scoped() {
    let state = test_state();
    let owner_token = state.token_service.issue(Uuid::new_v4()).unwrap();
    let stranger_token = state.token_service.issue(Uuid::new_v4()).unwrap();
    let app = test::init_service(create_app(state, MAX_PAYLOAD)).await;

    create_listing(&app, &owner_token, json!({"title": "2014 Honda Civic"})).await;

    let req = test::TestRequest::get()
        .uri("/api/search?keyword=civic")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", stranger_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_search_requires_token() {
    let app = test::init_service(create_app(test_state(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::get()
        .uri("/api/search?keyword=civic")
        .to_request();
    let resp = call_rendered(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Access denied");
}
