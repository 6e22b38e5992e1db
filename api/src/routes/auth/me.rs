use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /v1/auth/me
pub async fn me(state: web::Data<AppState>, auth: AuthContext) -> Result<HttpResponse, ApiError> {
    let user = state.auth_service.me(&auth).await?;
    Ok(HttpResponse::Ok().json(user))
}
