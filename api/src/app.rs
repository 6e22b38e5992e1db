//! Application state and factory
//!
//! This module wires the use-case services into shared state and declares
//! the route table together with each route's access requirements.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpRequest,
};
use tm_core::{
    domain::entities::Role,
    repositories::{CompanyRepository, TaskRepository, UserRepository},
    services::{
        AuthService, CompanyService, PasswordHasher, TaskService, TokenService, UserService,
    },
    AccessPolicy, AuthorizationPipeline,
};
use tm_shared::config::{CorsConfig, Environment};

use crate::config::{json_config, path_config, query_config};
use crate::handlers::ApiError;
use crate::middleware::{create_cors, Authorize, NormalizeErrors, SecurityMiddleware};
use crate::routes::{auth, company, health, task, user};

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub company_service: Arc<CompanyService>,
    pub user_service: Arc<UserService>,
    pub task_service: Arc<TaskService>,
    pub pipeline: Arc<AuthorizationPipeline>,
}

impl AppState {
    /// Build every service on top of the given collaborators
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                users.clone(),
                companies.clone(),
                hasher.clone(),
                tokens.clone(),
            )),
            company_service: Arc::new(CompanyService::new(companies.clone())),
            user_service: Arc::new(UserService::new(users.clone(), companies.clone(), hasher)),
            task_service: Arc::new(TaskService::new(tasks, users, companies)),
            pipeline: Arc::new(AuthorizationPipeline::new(tokens)),
        }
    }
}

/// HTTP-level settings that shape the app
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub environment: Environment,
    pub cors: CorsConfig,
    pub max_payload_size: usize,
    pub access_log: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            cors: CorsConfig::development(),
            max_payload_size: 1024 * 1024,
            access_log: true,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: AppState,
    settings: &HttpSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let pipeline = web::Data::from(state.pipeline.clone());
    let logger = if settings.access_log {
        Logger::default()
    } else {
        Logger::default().exclude_regex(".*")
    };

    App::new()
        .app_data(web::Data::new(state))
        .app_data(pipeline)
        .app_data(json_config(settings.max_payload_size))
        .app_data(web::PayloadConfig::new(settings.max_payload_size))
        .app_data(path_config())
        .app_data(query_config())
        // innermost first: errors are normalized before headers and CORS apply
        .wrap(NormalizeErrors)
        .wrap(SecurityMiddleware::new(settings.environment))
        .wrap(create_cors(&settings.cors))
        .wrap(logger)
        .configure(configure_routes)
        .default_service(web::route().to(not_found))
}

/// Route table; every route declares who may call it
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let everyone = || Authorize::roles([Role::SuperAdmin, Role::Admin, Role::User]);
    let admins = || Authorize::roles([Role::SuperAdmin, Role::Admin]);
    let super_admin = || Authorize::roles([Role::SuperAdmin]);
    let company_admin =
        || Authorize::roles([Role::Admin]).with_policy(AccessPolicy::admin_scope());
    let self_or_admin = || everyone().with_policy(AccessPolicy::self_access());

    cfg.route(
        "/health",
        web::get().to(health::health_check).wrap(Authorize::public()),
    )
    .service(
        web::scope("/v1")
            .service(
                web::scope("/auth")
                    .route(
                        "/login",
                        web::post().to(auth::login).wrap(Authorize::public()),
                    )
                    .route("/me", web::get().to(auth::me).wrap(everyone())),
            )
            .service(
                web::scope("/company")
                    .route("", web::post().to(company::create).wrap(super_admin()))
                    .route("", web::get().to(company::list).wrap(everyone()))
                    .route("/{company_id}", web::get().to(company::get).wrap(everyone()))
                    .route(
                        "/{company_id}",
                        web::put().to(company::update).wrap(company_admin()),
                    )
                    .route(
                        "/{company_id}",
                        web::delete().to(company::delete).wrap(super_admin()),
                    )
                    .route(
                        "/{company_id}/user",
                        web::post().to(user::create).wrap(admins()),
                    )
                    .route(
                        "/{company_id}/user",
                        web::get().to(user::list).wrap(everyone()),
                    )
                    .route(
                        "/{company_id}/user/{id}",
                        web::get().to(user::get).wrap(everyone()),
                    )
                    .route(
                        "/{company_id}/user/{id}",
                        web::put().to(user::update).wrap(self_or_admin()),
                    )
                    .route(
                        "/{company_id}/user/{id}",
                        web::delete().to(user::delete).wrap(self_or_admin()),
                    )
                    .route(
                        "/{company_id}/task",
                        web::post().to(task::create).wrap(everyone()),
                    )
                    .route(
                        "/{company_id}/task",
                        web::get().to(task::list).wrap(everyone()),
                    )
                    .route(
                        "/{company_id}/task/{id}",
                        web::get().to(task::get).wrap(everyone()),
                    )
                    .route(
                        "/{company_id}/task/{id}",
                        web::put().to(task::update).wrap(everyone()),
                    )
                    .route(
                        "/{company_id}/task/{id}",
                        web::delete().to(task::delete).wrap(admins()),
                    )
                    .route(
                        "/{company_id}/task/{id}/assign",
                        web::patch().to(task::assign).wrap(company_admin()),
                    )
                    .route(
                        "/{company_id}/task/{id}/status",
                        web::patch().to(task::update_status).wrap(everyone()),
                    ),
            ),
    );
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::not_found(format!(
        "Cannot {} {}",
        req.method(),
        req.path()
    )))
}
