use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{auth::LoginRequest, validate};
use crate::handlers::ApiError;

/// Handler for POST /v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "ada@acme.io", "password": "Str0ng!pass" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJhbGciOi...", "company_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7" }
/// ```
///
/// ## Errors
/// - 400 when the body fails validation
/// - 404 `USER_NOT_FOUND` for an unknown email
/// - 401 `AUTHENTICATION_FAILED` for a wrong password
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;

    log::info!("Login attempt for {}", request.email);
    let response = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
