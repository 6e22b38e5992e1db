//! Security middleware for HTTPS enforcement and hardening headers.
//!
//! Every response receives the standard hardening headers
//! (`X-Content-Type-Options`, `X-Frame-Options`, `Referrer-Policy`, ...).
//! Production additionally sends HSTS and rejects plain HTTP requests that
//! did not arrive through a trusted proxy.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use tm_shared::config::Environment;

use super::error_handler::request_path;
use crate::handlers::{ApiError, ExceptionNormalizer};

/// Security middleware factory
#[derive(Debug, Clone)]
pub struct SecurityMiddleware {
    /// Whether to reject plain HTTP requests
    enforce_https: bool,
    /// Whether to send `Strict-Transport-Security`
    hsts: bool,
    /// Peers whose `X-Forwarded-Proto` header is trusted
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// Configure for the given environment
    pub fn new(environment: Environment) -> Self {
        let mut middleware = if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        };

        middleware.trusted_proxies.extend(
            std::env::var("TRUSTED_PROXIES")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        );

        log::info!(
            "Security middleware configured: enforce_https={}, hsts={}, trusted_proxies={:?}",
            middleware.enforce_https,
            middleware.hsts,
            middleware.trusted_proxies
        );

        middleware
    }

    /// Headers only, no HTTPS enforcement
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            hsts: false,
            trusted_proxies: vec!["127.0.0.1".to_string(), "::1".to_string()],
        }
    }

    pub fn production() -> Self {
        Self {
            enforce_https: true,
            hsts: true,
            trusted_proxies: vec![],
        }
    }

    pub fn with_trusted_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.trusted_proxies.push(proxy.into());
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            config: Rc::new(self.clone()),
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    config: Rc<SecurityMiddleware>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = Rc::clone(&self.config);

        Box::pin(async move {
            if config.enforce_https && !is_secure_request(&req, &config.trusted_proxies) {
                log::warn!("Insecure request blocked: {} {}", req.method(), req.path());
                let err: Error = ApiError::http(403, "HTTPS required").into();
                let response = ExceptionNormalizer::catch(&err, &request_path(req.request()));
                let mut response = req.into_response(response).map_into_right_body();
                add_security_response_headers(&mut response, config.hsts);
                return Ok(response);
            }

            let mut response = service.call(req).await?.map_into_left_body();
            add_security_response_headers(&mut response, config.hsts);

            Ok(response)
        })
    }
}

/// HTTPS directly, or HTTPS terminated by a trusted proxy
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    if req.app_config().secure() {
        return true;
    }

    if let Some(proto) = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
    {
        let peer_addr = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default();
        if proto == "https" && is_trusted_proxy(&peer_addr, trusted_proxies) {
            return true;
        }
    }

    false
}

fn is_trusted_proxy(peer_ip: &str, trusted_proxies: &[String]) -> bool {
    trusted_proxies.iter().any(|trusted| trusted == peer_ip)
}

fn add_security_response_headers<B>(response: &mut ServiceResponse<B>, hsts: bool) {
    let headers = response.headers_mut();

    if hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("0"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none';"),
    );
    headers.insert(
        header::HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );
}
