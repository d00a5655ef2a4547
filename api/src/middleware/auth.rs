//! Token authentication middleware guarding the listing routes.
//!
//! The gate reads the `Authorization` header, verifies the token through the
//! core `TokenService`, and injects the authenticated user's identity into
//! the request. Handlers reach the identity through the `Identity` extractor.
//!
//! Two failure modes are distinguished on the wire: a request with no
//! `Authorization` header at all gets 401, a request with a header that does
//! not verify gets 400.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use cv_core::errors::TokenError;
use cv_core::services::token::TokenService;

use crate::handlers::error::ApiError;

/// Authenticated user identity injected into guarded requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// User id taken from the verified token's subject
    pub user_id: Uuid,
}

/// Authentication middleware factory
#[derive(Clone)]
pub struct AuthGate {
    token_service: Arc<TokenService>,
}

impl AuthGate {
    /// Creates an authentication gate backed by the given token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Authentication middleware service
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let header = match req.headers().get(AUTHORIZATION) {
                Some(value) => value,
                None => return Err(ApiError::from(TokenError::MissingToken).into()),
            };

            // The raw header value is accepted as the token; a Bearer
            // scheme prefix is stripped when present.
            let token = match header.to_str() {
                Ok(raw) => raw.strip_prefix("Bearer ").unwrap_or(raw).to_string(),
                Err(_) => return Err(ApiError::from(TokenError::InvalidToken).into()),
            };

            let claims = match token_service.verify(&token) {
                Ok(claims) => claims,
                Err(e) => return Err(ApiError::from(e).into()),
            };

            let user_id = match claims.subject() {
                Ok(user_id) => user_id,
                Err(_) => return Err(ApiError::from(TokenError::InvalidToken).into()),
            };

            // Inject the identity into request extensions
            req.extensions_mut().insert(Identity { user_id });

            service.call(req).await
        })
    }
}

impl FromRequest for Identity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Identity>()
            .copied()
            .ok_or_else(|| ApiError::from(TokenError::MissingToken));

        ready(result)
    }
}
