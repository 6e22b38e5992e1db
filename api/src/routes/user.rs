//! User route handlers, scoped to `/v1/company/{company_id}/user`

use actix_web::{web, HttpResponse};
use tm_core::domain::value_objects::PageRequest;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{
    user::{CreateUserRequest, UpdateUserRequest},
    validate,
};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

pub async fn create(
    state: web::Data<AppState>,
    auth: AuthContext,
    company_id: web::Path<Uuid>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;
    let new_user = request.into_inner().into_new_user()?;

    let user = state
        .user_service
        .create(&auth, company_id.into_inner(), new_user)
        .await?;
    Ok(HttpResponse::Created().json(user))
}

pub async fn list(
    state: web::Data<AppState>,
    auth: AuthContext,
    company_id: web::Path<Uuid>,
    page: web::Query<PageRequest>,
) -> Result<HttpResponse, ApiError> {
    let users = state
        .user_service
        .list(&auth, company_id.into_inner(), &page)
        .await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn get(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (company_id, id) = path.into_inner();
    let user = state.user_service.get(&auth, company_id, id).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn update(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;
    let (company_id, id) = path.into_inner();
    let changes = request.into_inner().into_update()?;

    let user = state
        .user_service
        .update(&auth, company_id, id, changes)
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (company_id, id) = path.into_inner();
    state.user_service.delete(&auth, company_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
