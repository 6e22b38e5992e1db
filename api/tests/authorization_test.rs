//! End-to-end tests for the per-route authorization gate

mod common;

use actix_web::{
    http::{header::HeaderValue, StatusCode},
    test,
};
use serde_json::{json, Value};
use tm_api::{create_app, HttpSettings};
use tm_core::domain::entities::Role;
use tm_core::domain::value_objects::CurrentUser;
use tm_core::services::{JwtTokenService, TokenService, TokenServiceConfig};
use uuid::Uuid;

use common::{TestContext, PASSWORD};

fn error_of(body: &Value) -> (u64, u64, &str) {
    (
        body["error"]["status"].as_u64().unwrap(),
        body["error"]["details"]["code"].as_u64().unwrap(),
        body["error"]["details"]["description"].as_str().unwrap(),
    )
}

#[actix_web::test]
async fn test_login_is_public() {
    let ctx = TestContext::new();
    let company = ctx.company("Acme").await;
    ctx.member(&company, "ada@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({ "email": "ada@acme.test", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["company_id"], company.id.to_string());
}

#[actix_web::test]
async fn test_login_with_wrong_password() {
    let ctx = TestContext::new();
    let company = ctx.company("Acme").await;
    ctx.member(&company, "ada@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::post()
        .uri("/v1/auth/login")
        .set_json(json!({ "email": "ada@acme.test", "password": "Wrong!pass1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1000);
}

#[actix_web::test]
async fn test_issued_token_opens_me() {
    let ctx = TestContext::new();
    let company = ctx.company("Acme").await;
    let user = ctx.member(&company, "ada@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(ctx.bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "ada@acme.test");
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_missing_header_requires_authentication() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get().uri("/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1031);
}

#[actix_web::test]
async fn test_non_bearer_scheme_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(("Authorization", "Basic x"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1029);
}

#[actix_web::test]
async fn test_non_ascii_header_is_malformed() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(("Authorization", HeaderValue::from_bytes(b"Bearer t\xf6k").unwrap()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1029);
}

#[actix_web::test]
async fn test_malformed_token_is_invalid() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(("Authorization", "Bearer bad.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    let (status, code, description) = error_of(&body);
    assert_eq!(status, 401);
    assert_eq!(code, 1002);
    assert_eq!(description, "Invalid JWT token.");
    assert_eq!(body["error"]["name"], "UNAUTHORIZED");
    assert_eq!(body["error"]["details"]["path"], "/v1/auth/me");
}

#[actix_web::test]
async fn test_expired_token_is_invalid() {
    let ctx = TestContext::new();
    let company = ctx.company("Acme").await;
    let user = ctx.member(&company, "ada@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let stale = JwtTokenService::new(
        TokenServiceConfig::new("integration-test-secret").with_expiry_seconds(-3600),
    );
    let token = stale.encode(&CurrentUser::from(&user)).unwrap();

    let req = test::TestRequest::get()
        .uri("/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1002);
}

#[actix_web::test]
async fn test_user_on_admin_route_is_denied() {
    let ctx = TestContext::new();
    let company = ctx.company("Acme").await;
    let user = ctx.member(&company, "ada@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/v1/company/{}", company.id))
        .insert_header(ctx.bearer(&user))
        .set_json(json!({ "name": "Renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    let (status, code, _) = error_of(&body);
    assert_eq!((status, code), (403, 1003));
    assert_eq!(body["error"]["name"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_admin_of_other_company_is_denied() {
    let ctx = TestContext::new();
    let acme = ctx.company("Acme").await;
    let globex = ctx.company("Globex").await;
    let admin = ctx.member(&acme, "boss@acme.test", Role::Admin).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/v1/company/{}", globex.id))
        .insert_header(ctx.bearer(&admin))
        .set_json(json!({ "name": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1003);
}

#[actix_web::test]
async fn test_admin_renames_own_company() {
    let ctx = TestContext::new();
    let acme = ctx.company("Acme").await;
    let admin = ctx.member(&acme, "boss@acme.test", Role::Admin).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/v1/company/{}", acme.id))
        .insert_header(ctx.bearer(&admin))
        .set_json(json!({ "name": "Acme Corp" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Acme Corp");
}

#[actix_web::test]
async fn test_user_cannot_modify_another_user() {
    let ctx = TestContext::new();
    let acme = ctx.company("Acme").await;
    let ada = ctx.member(&acme, "ada@acme.test", Role::User).await;
    let bob = ctx.member(&acme, "bob@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/v1/company/{}/user/{}", acme.id, bob.id))
        .insert_header(ctx.bearer(&ada))
        .set_json(json!({ "full_name": "Not Bob" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/v1/company/{}/user/{}", acme.id, ada.id))
        .insert_header(ctx.bearer(&ada))
        .set_json(json!({ "full_name": "Ada King" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["full_name"], "Ada King");
}

#[actix_web::test]
async fn test_cross_tenant_read_is_rejected() {
    let ctx = TestContext::new();
    let acme = ctx.company("Acme").await;
    let globex = ctx.company("Globex").await;
    let ada = ctx.member(&acme, "ada@acme.test", Role::User).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/v1/company/{}/task", globex.id))
        .insert_header(ctx.bearer(&ada))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_of(&body).1, 1021);
}

#[actix_web::test]
async fn test_missing_company_is_not_found() {
    let ctx = TestContext::new();
    let acme = ctx.company("Acme").await;
    let root = ctx.member(&acme, "root@acme.test", Role::SuperAdmin).await;
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let missing = Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/v1/company/{missing}"))
        .insert_header(ctx.bearer(&root))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    let (status, code, description) = error_of(&body);
    assert_eq!((status, code), (404, 1007));
    assert_eq!(description, "Company not found.");
    assert_eq!(body["error"]["name"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_health_needs_no_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &HttpSettings::default())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
