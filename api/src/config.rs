//! Extractor configuration.
//!
//! Malformed bodies, path segments and query strings are reported as plain
//! 400 errors so they flow through the same normalization as everything
//! else.

use actix_web::{error, web, HttpRequest};

use crate::handlers::ApiError;

/// JSON body limits and parse failures
pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(|err, _req: &HttpRequest| {
            let message = match &err {
                error::JsonPayloadError::ContentType => {
                    return ApiError::http(415, "Content type must be application/json").into();
                }
                error::JsonPayloadError::OverflowKnownLength { .. }
                | error::JsonPayloadError::Overflow { .. } => {
                    return ApiError::http(413, "Request body is too large").into();
                }
                error::JsonPayloadError::Deserialize(e) => e.to_string(),
                other => other.to_string(),
            };
            log::debug!("Rejected JSON body: {}", message);
            ApiError::bad_request(message).into()
        })
}

/// Path segments that fail to parse (e.g. a malformed UUID)
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req: &HttpRequest| {
        log::debug!("Rejected path {}: {}", req.path(), err);
        ApiError::bad_request("Validation failed (uuid is expected)").into()
    })
}

/// Query strings that fail to deserialize
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        ApiError::bad_request(err.to_string()).into()
    })
}
