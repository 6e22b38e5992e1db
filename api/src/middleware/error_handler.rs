//! Middleware rendering every failure as an [`ErrorEnvelope`] carrying the
//! request path and query string.
//!
//! [`ErrorEnvelope`]: crate::handlers::ErrorEnvelope

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::handlers::ExceptionNormalizer;

/// Catches errors from inner services and error responses from handlers
/// and extractors, and replaces them with the normalized envelope.
pub struct NormalizeErrors;

impl<S, B> Transform<S, ServiceRequest> for NormalizeErrors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = NormalizeErrorsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(NormalizeErrorsService {
            service: Rc::new(service),
        }))
    }
}

pub struct NormalizeErrorsService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for NormalizeErrorsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // only the path is kept; holding the request would block routing
        let path = request_path(req.request());

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let normalized = res
                        .response()
                        .error()
                        .map(|err| ExceptionNormalizer::catch(err, &request_path(res.request())));

                    match normalized {
                        Some(response) => {
                            let (request, _) = res.into_parts();
                            Ok(ServiceResponse::new(request, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    let response = ExceptionNormalizer::catch(&err, &path);
                    Err(InternalError::from_response(err, response).into())
                }
            }
        })
    }
}

/// Path and query string as sent by the client
pub(crate) fn request_path(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string())
}
