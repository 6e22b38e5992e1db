//! Per-route authorization middleware.
//!
//! Each protected route is wrapped with an [`Authorize`] carrying its
//! [`RouteAccess`]. The middleware builds a [`RequestContext`] from the
//! matched path parameters, the query string and the headers (plus the JSON
//! body on routes with policies), runs the shared [`AuthorizationPipeline`]
//! and, on success, injects the verified caller into the request extensions
//! for the [`AuthContext`] extractor. Rejections are returned as error
//! responses so the normalizer renders them with the request path.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::CONTENT_TYPE,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    collections::HashMap,
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    task::{Context, Poll},
};
use tm_core::{
    domain::{entities::Role, value_objects::CurrentUser},
    errors::{catalog, DomainException},
    AccessPolicy, AuthorizationPipeline, RequestContext, RouteAccess,
};

use crate::handlers::ApiError;

/// Authenticated caller injected by [`Authorize`]
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext(pub CurrentUser);

impl Deref for AuthContext {
    type Target = CurrentUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Authorization middleware factory
pub struct Authorize {
    access: Rc<RouteAccess>,
}

impl Authorize {
    pub fn new(access: RouteAccess) -> Self {
        Self {
            access: Rc::new(access),
        }
    }

    /// No authentication required
    pub fn public() -> Self {
        Self::new(RouteAccess::public())
    }

    /// Authenticated callers holding one of `roles`
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::new(RouteAccess::roles(roles))
    }

    /// Any authenticated caller
    pub fn any_role() -> Self {
        Self::new(RouteAccess::any_role())
    }

    /// Additionally require `policy` to pass
    pub fn with_policy(self, policy: AccessPolicy) -> Self {
        let access = Rc::try_unwrap(self.access).unwrap_or_else(|shared| (*shared).clone());
        Self::new(access.with_policy(policy))
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authorize
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthorizeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizeMiddleware {
            service: Rc::new(service),
            access: Rc::clone(&self.access),
        }))
    }
}

/// Authorization middleware service
pub struct AuthorizeMiddleware<S> {
    service: Rc<S>,
    access: Rc<RouteAccess>,
}

impl<S, B> Service<ServiceRequest> for AuthorizeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let access = Rc::clone(&self.access);

        Box::pin(async move {
            if access.is_public() {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let Some(pipeline) = req.app_data::<web::Data<AuthorizationPipeline>>().cloned()
            else {
                let err = ApiError::Unexpected(anyhow::anyhow!(
                    "authorization pipeline is not registered as app data"
                ));
                return Ok(req.error_response(err).map_into_right_body());
            };

            let mut ctx = request_context(&req);
            if !access.policies().is_empty() && is_json(&req) {
                match req.extract::<web::Bytes>().await {
                    Ok(bytes) => {
                        ctx = ctx.with_body(
                            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null),
                        );
                        req.set_payload(bytes.into());
                    }
                    Err(err) => return Ok(req.error_response(err).map_into_right_body()),
                }
            }

            if let Err(err) = pipeline.authorize(&access, &mut ctx) {
                return Ok(req.error_response(ApiError::from(err)).map_into_right_body());
            }

            if let Some(user) = ctx.user() {
                req.extensions_mut().insert(AuthContext(user.clone()));
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn is_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Snapshot of the request as seen by access policies
fn request_context(req: &ServiceRequest) -> RequestContext {
    let mut ctx = RequestContext::new();

    for (name, value) in req.match_info().iter() {
        ctx = ctx.with_param(name, value);
    }

    if let Ok(query) = web::Query::<HashMap<String, String>>::from_query(req.query_string()) {
        for (name, value) in query.into_inner() {
            ctx = ctx.with_query(name, value);
        }
    }

    // opaque bytes are kept so a garbled header still counts as present
    for (name, value) in req.headers().iter() {
        ctx = ctx.with_header(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
    }

    ctx
}

/// Extractor for the caller verified by [`Authorize`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                ApiError::from(DomainException::new(&catalog::auth::AUTHENTICATION_REQUIRED))
                    .into()
            });

        ready(result)
    }
}
