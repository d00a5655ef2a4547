//! Domain-to-HTTP error mapping.
//!
//! Every error leaves the API as `{"error": "<message>"}`. The mapping below
//! decides the status code and the client-facing message; internal detail is
//! logged and never echoed.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use cv_core::errors::{AuthError, DomainError, StorageError, TokenError, ValidationError};
use cv_shared::types::ErrorBody;

/// Wrapper that turns a `DomainError` into an HTTP error response
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
}

impl ApiError {
    pub fn new(error: DomainError) -> Self {
        Self { error }
    }

    /// Status code and client-facing message for the wrapped error
    fn status_and_message(&self) -> (StatusCode, String) {
        match &self.error {
            DomainError::Auth(AuthError::UsernameTaken) => {
                (StatusCode::BAD_REQUEST, self.error.to_string())
            }
            DomainError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, self.error.to_string())
            }
            // Absent credential vs invalid credential is part of the
            // public contract: 401 for missing, 400 for bad.
            DomainError::Token(TokenError::MissingToken) => {
                (StatusCode::UNAUTHORIZED, "Access denied".to_string())
            }
            DomainError::Token(TokenError::InvalidToken)
            | DomainError::Token(TokenError::TokenExpired) => {
                (StatusCode::BAD_REQUEST, "Invalid token".to_string())
            }
            DomainError::Token(TokenError::TokenGenerationFailed) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            DomainError::ValidationErr(validation) => {
                (StatusCode::BAD_REQUEST, validation.to_string())
            }
            DomainError::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            DomainError::Storage(storage) => (StatusCode::BAD_GATEWAY, storage.to_string()),
            DomainError::Database { .. } | DomainError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status_and_message().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            log::error!("API error: {:?}", self.error);
        } else {
            log::debug!("Request rejected: {:?}", self.error);
        }

        HttpResponse::build(status).json(ErrorBody::new(message))
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self::new(DomainError::Token(error))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|field| field.to_string())
            .unwrap_or_else(|| "request".to_string());

        Self::new(DomainError::ValidationErr(ValidationError::InvalidFormat {
            field,
        }))
    }
}
