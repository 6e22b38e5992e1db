//! Task route handlers, scoped to `/v1/company/{company_id}/task`

use actix_web::{web, HttpResponse};
use tm_core::domain::value_objects::PageRequest;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{
    task::{AssignTaskRequest, CreateTaskRequest, UpdateTaskRequest, UpdateTaskStatusRequest},
    validate,
};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

pub async fn create(
    state: web::Data<AppState>,
    auth: AuthContext,
    company_id: web::Path<Uuid>,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;
    let new_task = request.into_inner().into_new_task()?;

    let task = state
        .task_service
        .create(&auth, company_id.into_inner(), new_task)
        .await?;
    Ok(HttpResponse::Created().json(task))
}

pub async fn list(
    state: web::Data<AppState>,
    auth: AuthContext,
    company_id: web::Path<Uuid>,
    page: web::Query<PageRequest>,
) -> Result<HttpResponse, ApiError> {
    let tasks = state
        .task_service
        .list(&auth, company_id.into_inner(), &page)
        .await?;
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn get(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (company_id, id) = path.into_inner();
    let task = state.task_service.get(&auth, company_id, id).await?;
    Ok(HttpResponse::Ok().json(task))
}

pub async fn update(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;
    let (company_id, id) = path.into_inner();
    let changes = request.into_inner().into_update()?;

    let task = state
        .task_service
        .update(&auth, company_id, id, changes)
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// PATCH /v1/company/{company_id}/task/{id}/status
pub async fn update_status(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<UpdateTaskStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let (company_id, id) = path.into_inner();
    let status = request.status()?;

    let task = state
        .task_service
        .update_status(&auth, company_id, id, status)
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// PATCH /v1/company/{company_id}/task/{id}/assign
pub async fn assign(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<AssignTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let (company_id, id) = path.into_inner();
    let user_id = request.user_id()?;

    let task = state
        .task_service
        .assign(&auth, company_id, id, user_id)
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (company_id, id) = path.into_inner();
    state.task_service.delete(&auth, company_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
