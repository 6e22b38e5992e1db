//! Unit tests for token service

use uuid::Uuid;

use crate::domain::entities::Role;
use crate::domain::value_objects::TokenPayload;
use crate::errors::catalog;
use crate::services::token::{JwtTokenService, TokenService, TokenServiceConfig};

fn payload() -> TokenPayload {
    TokenPayload {
        id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        role: Role::Admin,
    }
}

#[test]
fn test_verify_returns_encoded_identity() {
    let service = JwtTokenService::new(TokenServiceConfig::new("test-secret"));
    let payload = payload();

    let token = service.encode(&payload).unwrap();
    let verified = service.verify(&token).unwrap();

    assert_eq!(verified, payload);
    assert_eq!(service.expires_in(), 3600);
}

#[test]
fn test_token_signed_with_other_secret_is_invalid() {
    let issuer = JwtTokenService::new(TokenServiceConfig::new("secret-a"));
    let verifier = JwtTokenService::new(TokenServiceConfig::new("secret-b"));

    let token = issuer.encode(&payload()).unwrap();
    let err = verifier.verify(&token).unwrap_err();

    assert!(err.is(&catalog::auth::TOKEN_INVALID));
}

#[test]
fn test_garbage_token_is_invalid() {
    let service = JwtTokenService::new(TokenServiceConfig::default());
    let err = service.verify("not-a-jwt").unwrap_err();
    assert_eq!(err.code(), 1002);
}

#[test]
fn test_expired_token() {
    let service =
        JwtTokenService::new(TokenServiceConfig::new("test-secret").with_expiry_seconds(-3600));

    let token = service.encode(&payload()).unwrap();
    let err = service.verify(&token).unwrap_err();

    assert!(err.is(&catalog::auth::TOKEN_EXPIRED));
}
