//! Unit tests for the authentication service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Role;
use crate::domain::value_objects::CurrentUser;
use crate::errors::catalog;
use crate::services::auth::AuthService;
use crate::services::testing::{as_caller, Fixture};
use crate::services::token::{JwtTokenService, TokenService, TokenServiceConfig};

fn service(fixture: &Fixture, tokens: Arc<JwtTokenService>) -> AuthService {
    AuthService::new(
        fixture.users.clone(),
        fixture.companies.clone(),
        fixture.hasher.clone(),
        tokens,
    )
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let fixture = Fixture::new();
    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::new("auth-secret")));
    let company = fixture.company("Acme").await;
    let user = fixture.member(company.id, "ada@acme.test", Role::Admin).await;

    let response = service(&fixture, tokens.clone())
        .login("ada@acme.test", "Str0ng!pass")
        .await
        .unwrap();

    assert_eq!(response.company_id, company.id);
    let payload = tokens.verify(&response.access_token).unwrap();
    assert_eq!(payload, as_caller(&user));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let fixture = Fixture::new();
    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::default()));

    let err = service(&fixture, tokens)
        .login("nobody@acme.test", "Str0ng!pass")
        .await
        .unwrap_err();
    assert!(err.is(&catalog::user::USER_NOT_FOUND));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let fixture = Fixture::new();
    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::default()));
    let company = fixture.company("Acme").await;
    fixture.member(company.id, "ada@acme.test", Role::User).await;

    let err = service(&fixture, tokens)
        .login("ada@acme.test", "wrong")
        .await
        .unwrap_err();
    assert!(err.is(&catalog::auth::AUTHENTICATION_FAILED));
    assert_eq!(err.http_status(), 401);
}

#[tokio::test]
async fn test_me_returns_stored_user() {
    let fixture = Fixture::new();
    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::default()));
    let company = fixture.company("Acme").await;
    let user = fixture.member(company.id, "ada@acme.test", Role::User).await;

    let me = service(&fixture, tokens)
        .me(&as_caller(&user))
        .await
        .unwrap();
    assert_eq!(me.id, user.id);
}

#[tokio::test]
async fn test_me_with_deleted_company() {
    let fixture = Fixture::new();
    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::default()));
    let caller = CurrentUser {
        id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        name: "Ghost".to_string(),
        email: "ghost@acme.test".to_string(),
        role: Role::User,
    };

    let err = service(&fixture, tokens).me(&caller).await.unwrap_err();
    assert!(err.is(&catalog::company::COMPANY_NOT_FOUND));
}

#[tokio::test]
async fn test_me_with_deleted_user() {
    let fixture = Fixture::new();
    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::default()));
    let company = fixture.company("Acme").await;
    let caller = CurrentUser {
        id: Uuid::new_v4(),
        company_id: company.id,
        name: "Ghost".to_string(),
        email: "ghost@acme.test".to_string(),
        role: Role::User,
    };

    let err = service(&fixture, tokens).me(&caller).await.unwrap_err();
    assert!(err.is(&catalog::user::USER_NOT_FOUND));
}
