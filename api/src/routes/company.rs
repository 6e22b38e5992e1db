//! Company route handlers

use actix_web::{web, HttpResponse};
use tm_core::domain::value_objects::PageRequest;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{
    company::{CreateCompanyRequest, UpdateCompanyRequest},
    validate,
};
use crate::handlers::ApiError;

/// POST /v1/company
pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<CreateCompanyRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;

    let company = state.company_service.create(request.into_inner().name).await?;
    Ok(HttpResponse::Created().json(company))
}

/// GET /v1/company?page=&page_size=
pub async fn list(
    state: web::Data<AppState>,
    page: web::Query<PageRequest>,
) -> Result<HttpResponse, ApiError> {
    let companies = state.company_service.list(&page).await?;
    Ok(HttpResponse::Ok().json(companies))
}

/// GET /v1/company/{company_id}
pub async fn get(
    state: web::Data<AppState>,
    company_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let company = state.company_service.get(company_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(company))
}

/// PUT /v1/company/{company_id}
pub async fn update(
    state: web::Data<AppState>,
    company_id: web::Path<Uuid>,
    request: web::Json<UpdateCompanyRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&request.0)?;

    let company = state
        .company_service
        .update(company_id.into_inner(), request.into_inner().name)
        .await?;
    Ok(HttpResponse::Ok().json(company))
}

/// DELETE /v1/company/{company_id}
pub async fn delete(
    state: web::Data<AppState>,
    company_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state.company_service.delete(company_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
