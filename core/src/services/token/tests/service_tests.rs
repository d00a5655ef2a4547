//! Unit tests for token issuance and verification

use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::default())
}

#[test]
fn test_issue_then_verify_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.subject().unwrap(), user_id);
    assert_eq!(claims.iss, "carvault");
}

#[test]
fn test_tampered_token_is_rejected() {
    let service = service();
    let token = service.issue(Uuid::new_v4()).unwrap();

    // Flip one character somewhere in the middle of the token
    let mid = token.len() / 2;
    let mut chars: Vec<char> = token.chars().collect();
    chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    let err = service.verify(&tampered).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidToken)
    ));
}

#[test]
fn test_garbage_token_is_rejected() {
    let service = service();
    let err = service.verify("definitely-not-a-jwt").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidToken)
    ));
}

#[test]
fn test_expired_token_is_rejected() {
    // TTL far enough in the past to clear the default decode leeway
    let service = TokenService::new(TokenServiceConfig {
        ttl_secs: -3600,
        ..Default::default()
    });

    let token = service.issue(Uuid::new_v4()).unwrap();
    let err = service.verify(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::TokenExpired)
    ));
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let issuing = TokenService::new(TokenServiceConfig {
        jwt_secret: "a-completely-different-secret".to_string(),
        ..Default::default()
    });
    let verifying = service();

    let token = issuing.issue(Uuid::new_v4()).unwrap();
    assert!(verifying.verify(&token).is_err());
}

#[test]
fn test_token_from_other_issuer_is_rejected() {
    let issuing = TokenService::new(TokenServiceConfig {
        issuer: "someone-else".to_string(),
        ..Default::default()
    });
    let verifying = service();

    let token = issuing.issue(Uuid::new_v4()).unwrap();
    let err = verifying.verify(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidToken)
    ));
}
