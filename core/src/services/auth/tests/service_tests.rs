//! Unit tests for the authentication service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

// Minimum bcrypt cost keeps the tests fast
fn test_config() -> AuthServiceConfig {
    AuthServiceConfig { bcrypt_cost: 4 }
}

fn service_with(
    users: Arc<MockUserRepository>,
    tokens: Arc<TokenService>,
) -> AuthService<MockUserRepository> {
    AuthService::new(users, tokens, test_config())
}

fn service() -> AuthService<MockUserRepository> {
    service_with(
        Arc::new(MockUserRepository::new()),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
    )
}

#[tokio::test]
async fn test_signup_then_login_round_trip() {
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let service = service_with(Arc::new(MockUserRepository::new()), Arc::clone(&tokens));

    let account = service.signup("alice", "hunter2000").await.unwrap();
    let token = service.login("alice", "hunter2000").await.unwrap();

    let claims = tokens.verify(&token).unwrap();
    assert_eq!(claims.subject().unwrap(), account.id);
}

#[tokio::test]
async fn test_signup_stores_a_digest_not_the_password() {
    let users = Arc::new(MockUserRepository::new());
    let service = service_with(
        Arc::clone(&users),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
    );

    service.signup("alice", "hunter2000").await.unwrap();

    let stored = users.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "hunter2000");
    assert!(bcrypt::verify("hunter2000", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_duplicate_signup_is_rejected_and_original_intact() {
    let service = service();

    service.signup("alice", "first-password").await.unwrap();
    let err = service.signup("alice", "second-password").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UsernameTaken)));

    // The original credentials still work
    service.login("alice", "first-password").await.unwrap();
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let service = service();
    service.signup("alice", "correct-password").await.unwrap();

    let wrong_password = service.login("alice", "wrong-password").await.unwrap_err();
    let unknown_user = service.login("nobody", "whatever").await.unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_user,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_signup_requires_both_fields() {
    let service = service();

    let missing_username = service.signup("   ", "password").await.unwrap_err();
    assert!(matches!(
        missing_username,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));

    let missing_password = service.signup("alice", "").await.unwrap_err();
    assert!(matches!(
        missing_password,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));
}

#[tokio::test]
async fn test_signup_rejects_malformed_usernames() {
    let service = service();

    let err = service.signup("has spaces", "password").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidFormat { .. })
    ));
}
