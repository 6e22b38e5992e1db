//! Request and response bodies of the HTTP API.

pub mod auth;
pub mod company;
pub mod task;
pub mod user;

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::handlers::ApiError;

/// Run `validator` rules, turning violations into one 400 message each
pub fn validate<T: Validate>(dto: &T) -> Result<(), ApiError> {
    dto.validate()
        .map_err(|errors| ApiError::bad_request(validation_messages(&errors)))
}

/// Flatten validation errors into their messages, ordered by field
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(None, errors, &mut messages);
    messages
}

fn collect_messages(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", path, error.code));
                    out.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(Some(&format!("{}[{}]", path, index)), nested, out);
                }
            }
        }
    }
}
