//! Error normalization for the HTTP surface.
//!
//! Every failure that leaves a handler, an extractor or a middleware is
//! reduced to one of three shapes and rendered as the same JSON envelope:
//!
//! 1. a [`DomainException`] raised by business logic or the authorization
//!    pipeline, reported with its catalog status, code and message;
//! 2. a plain HTTP error carrying its own status and one or more messages
//!    (validation failures, malformed bodies, unmatched routes);
//! 3. anything else, reported as a bare 500 while the cause is logged.

use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tm_core::errors::DomainException;
use uuid::Uuid;

/// Description used for failures that must not leak their cause
pub const UNKNOWN_ERROR_DESCRIPTION: &str = "Server internal error.";

/// Message(s) attached to a plain HTTP error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMessage {
    Single(String),
    Many(Vec<String>),
}

impl HttpMessage {
    /// Flatten into one description, list items joined with `", "`
    pub fn joined(&self) -> String {
        match self {
            HttpMessage::Single(message) => message.clone(),
            HttpMessage::Many(messages) => messages.join(", "),
        }
    }
}

impl fmt::Display for HttpMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<String> for HttpMessage {
    fn from(message: String) -> Self {
        HttpMessage::Single(message)
    }
}

impl From<&str> for HttpMessage {
    fn from(message: &str) -> Self {
        HttpMessage::Single(message.to_string())
    }
}

impl From<Vec<String>> for HttpMessage {
    fn from(messages: Vec<String>) -> Self {
        HttpMessage::Many(messages)
    }
}

/// Error type returned by handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainException),

    #[error("{message}")]
    Http { status: u16, message: HttpMessage },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<HttpMessage>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<HttpMessage>) -> Self {
        Self::http(400, message)
    }

    pub fn not_found(message: impl Into<HttpMessage>) -> Self {
        Self::http(404, message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        let status = match self {
            ApiError::Domain(e) => e.http_status(),
            ApiError::Http { status, .. } => *status,
            ApiError::Unexpected(_) => 500,
        };
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Rendered without a request path; [`NormalizeErrors`] re-renders it
    /// with the path when the middleware is mounted.
    ///
    /// [`NormalizeErrors`]: crate::middleware::NormalizeErrors
    fn error_response(&self) -> HttpResponse {
        ExceptionNormalizer::respond(ExceptionNormalizer::classify_api_error(self), "")
    }
}

/// Wire format of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// Correlation id, fresh per response
    pub id: Uuid,
    pub status: u16,
    /// Upper snake case status name, e.g. `NOT_FOUND`
    pub name: String,
    pub details: ErrorDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub path: String,
    pub code: u16,
    pub description: String,
}

/// Outcome of classifying a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub status: u16,
    pub code: u16,
    pub description: String,
}

impl Classified {
    fn unknown() -> Self {
        Self {
            status: 500,
            code: 500,
            description: UNKNOWN_ERROR_DESCRIPTION.to_string(),
        }
    }
}

/// Turns failures into [`ErrorEnvelope`] responses
pub struct ExceptionNormalizer;

impl ExceptionNormalizer {
    /// Classify any actix error, first matching shape wins
    pub fn classify(err: &actix_web::Error) -> Classified {
        if let Some(api_error) = err.as_error::<ApiError>() {
            return Self::classify_api_error(api_error);
        }

        let status = err.as_response_error().status_code();
        if status.is_server_error() {
            log::error!("Unhandled error: {:?}", err);
            return Classified::unknown();
        }

        Classified {
            status: status.as_u16(),
            code: status.as_u16(),
            description: err.to_string(),
        }
    }

    pub fn classify_api_error(err: &ApiError) -> Classified {
        match err {
            ApiError::Domain(exception) => Classified {
                status: exception.http_status(),
                code: exception.code(),
                description: exception.effective_message().to_string(),
            },
            ApiError::Http { status, message } => Classified {
                status: *status,
                code: *status,
                description: message.joined(),
            },
            ApiError::Unexpected(cause) => {
                log::error!("Unhandled error: {:?}", cause);
                Classified::unknown()
            }
        }
    }

    /// Build the envelope for a classified failure at `path`
    pub fn envelope(classified: Classified, path: &str) -> ErrorEnvelope {
        ErrorEnvelope {
            success: false,
            error: ErrorBody {
                id: Uuid::new_v4(),
                status: classified.status,
                name: status_name(classified.status),
                details: ErrorDetails {
                    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    path: path.to_string(),
                    code: classified.code,
                    description: classified.description,
                },
            },
        }
    }

    /// Classify `err` and render the response for `path`
    pub fn catch(err: &actix_web::Error, path: &str) -> HttpResponse {
        Self::respond(Self::classify(err), path)
    }

    /// Render a classified failure; falls back to a bare status body when
    /// the envelope cannot be serialized
    pub fn respond(classified: Classified, path: &str) -> HttpResponse {
        let status =
            StatusCode::from_u16(classified.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = Self::envelope(classified, path);

        match serde_json::to_string(&envelope) {
            Ok(body) => HttpResponse::build(status)
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .body(body),
            Err(e) => {
                log::error!("Failed to serialize error envelope: {}", e);
                fallback_response(status)
            }
        }
    }
}

fn fallback_response(status: StatusCode) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .body(format!(
            r#"{{"success":false,"error":{{"status":{}}}}}"#,
            status.as_u16()
        ))
}

/// `404` -> `NOT_FOUND`; non standard codes -> `Unknown Status`
pub fn status_name(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(|reason| {
            reason
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join("_")
                .to_ascii_uppercase()
        })
        .unwrap_or_else(|| "Unknown Status".to_string())
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}): {}",
            self.error.status, self.error.name, self.error.details.code, self.error.details.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use tm_core::errors::catalog;

    async fn envelope_of(response: HttpResponse) -> ErrorEnvelope {
        let body = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(404), "NOT_FOUND");
        assert_eq!(status_name(401), "UNAUTHORIZED");
        assert_eq!(status_name(500), "INTERNAL_SERVER_ERROR");
        assert_eq!(status_name(415), "UNSUPPORTED_MEDIA_TYPE");
        assert_eq!(status_name(599), "Unknown Status");
    }

    #[test]
    fn test_domain_exception_classification() {
        let err = ApiError::from(
            DomainException::new(&catalog::company::COMPANY_NOT_FOUND),
        );
        let classified = ExceptionNormalizer::classify_api_error(&err);

        assert_eq!(classified.status, 404);
        assert_eq!(classified.code, 1007);
        assert_eq!(classified.description, "Company not found.");
    }

    #[test]
    fn test_custom_message_wins() {
        let err = ApiError::from(
            DomainException::new(&catalog::general::VALIDATION_ERROR).with_message("Name is empty"),
        );
        let classified = ExceptionNormalizer::classify_api_error(&err);

        assert_eq!(classified.code, 1005);
        assert_eq!(classified.description, "Name is empty");
    }

    #[test]
    fn test_http_message_list_is_joined() {
        let err = ApiError::bad_request(vec![
            "name must be a string".to_string(),
            "email must be an email".to_string(),
        ]);
        let classified = ExceptionNormalizer::classify_api_error(&err);

        assert_eq!(classified.status, 400);
        assert_eq!(classified.code, 400);
        assert_eq!(classified.description, "name must be a string, email must be an email");
    }

    #[test]
    fn test_unexpected_error_is_hidden() {
        let err = ApiError::from(anyhow::anyhow!("connection refused at 10.0.0.3"));
        let classified = ExceptionNormalizer::classify_api_error(&err);

        assert_eq!(classified, Classified::unknown());
        assert!(!classified.description.contains("10.0.0.3"));
    }

    #[test]
    fn test_foreign_client_errors_keep_their_status() {
        let err = actix_web::error::ErrorMethodNotAllowed("Method not allowed");
        let classified = ExceptionNormalizer::classify(&err);

        assert_eq!(classified.status, 405);
        assert_eq!(classified.code, 405);
        assert_eq!(classified.description, "Method not allowed");
    }

    #[test]
    fn test_foreign_server_errors_are_unknown() {
        let err = actix_web::error::ErrorInternalServerError("secret stack trace");
        assert_eq!(ExceptionNormalizer::classify(&err), Classified::unknown());
    }

    #[test]
    fn test_envelope_ids_are_unique() {
        let first = ExceptionNormalizer::envelope(Classified::unknown(), "/a");
        let second = ExceptionNormalizer::envelope(Classified::unknown(), "/a");
        assert_ne!(first.error.id, second.error.id);
    }

    #[actix_web::test]
    async fn test_respond_writes_envelope() {
        let err: actix_web::Error =
            ApiError::from(DomainException::new(&catalog::auth::TOKEN_INVALID)).into();
        let response = ExceptionNormalizer::catch(&err, "/v1/auth/me");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let envelope = envelope_of(response).await;
        assert!(!envelope.success);
        assert_eq!(envelope.error.status, 401);
        assert_eq!(envelope.error.name, "UNAUTHORIZED");
        assert_eq!(envelope.error.details.code, 1002);
        assert_eq!(envelope.error.details.path, "/v1/auth/me");
        assert!(chrono::DateTime::parse_from_rfc3339(&envelope.error.details.timestamp).is_ok());
    }

    #[actix_web::test]
    async fn test_fallback_response_is_json() {
        let response = fallback_response(StatusCode::BAD_GATEWAY);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["status"], 502);
    }
}
