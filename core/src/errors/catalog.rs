//! Static registry of every error the backend can report.
//!
//! Entries are grouped by domain. Codes and identifiers are unique across
//! all groups; an error that applies to several domains lives in exactly
//! one group.

use std::fmt;

/// Immutable description of one error condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorDescriptor {
    /// Numeric code exposed to clients in `details.code`
    pub code: u16,
    /// Machine readable name
    pub identifier: &'static str,
    /// Default human readable message
    pub message: &'static str,
    /// HTTP status used when the error reaches the client
    pub http_status: u16,
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier, self.code)
    }
}

macro_rules! descriptor {
    ($name:ident, $code:expr, $status:expr, $message:expr) => {
        pub static $name: ErrorDescriptor = ErrorDescriptor {
            code: $code,
            identifier: stringify!($name),
            message: $message,
            http_status: $status,
        };
    };
}

/// Authentication and authorization failures
pub mod auth {
    use super::ErrorDescriptor;

    descriptor!(
        AUTHENTICATION_FAILED,
        1000,
        401,
        "Invalid credentials. The provided email or password is incorrect."
    );
    descriptor!(
        TOKEN_EXPIRED,
        1001,
        401,
        "Token has expired. You need to log in again to obtain a new token."
    );
    descriptor!(TOKEN_INVALID, 1002, 401, "Invalid JWT token.");
    descriptor!(
        ACCESS_DENIED,
        1003,
        403,
        "Access denied. You do not have permission to access this resource."
    );
    descriptor!(
        INVALID_CREDENTIALS_FORMAT,
        1029,
        401,
        "Invalid credentials format. The email or password is not in the correct format."
    );
    descriptor!(SESSION_EXPIRED, 1030, 401, "Session expired. Please log in again.");
    descriptor!(
        AUTHENTICATION_REQUIRED,
        1031,
        401,
        "Authentication required. Provide a bearer token in the Authorization header."
    );
}

/// Company aggregate failures
pub mod company {
    use super::ErrorDescriptor;

    descriptor!(
        DUPLICATE_ENTRY,
        1006,
        409,
        "The company you are trying to create already exists."
    );
    descriptor!(COMPANY_NOT_FOUND, 1007, 404, "Company not found.");
    descriptor!(COMPANY_ID_MISMATCH, 1021, 403, "Company ID does not match yours.");
}

/// User aggregate failures
pub mod user {
    use super::ErrorDescriptor;

    descriptor!(USER_NOT_FOUND, 1008, 404, "User not found.");
    descriptor!(
        INVALID_ROLE,
        1011,
        400,
        "Invalid role when creating or updating a user."
    );
    descriptor!(PASSWORD_TOO_WEAK, 1018, 400, "The provided password is too weak.");
    descriptor!(
        EMAIL_ALREADY_IN_USE,
        1019,
        409,
        "The provided email address is already registered."
    );
    descriptor!(
        USER_ID_MISMATCH,
        1022,
        403,
        "You do not have permission to access another user's data."
    );
}

/// Task aggregate failures
pub mod task {
    use super::ErrorDescriptor;

    descriptor!(TASK_NOT_FOUND, 1009, 404, "Task not found.");
    descriptor!(INVALID_STATUS, 1012, 400, "Invalid task status.");
    descriptor!(
        TASK_ALREADY_COMPLETED,
        1026,
        400,
        "The task has already been completed. It cannot be modified."
    );
    descriptor!(
        ASSIGNED_USER_NOT_FOUND,
        1027,
        404,
        "Assigned user for the task not found."
    );
}

/// Failures not tied to a single aggregate
pub mod general {
    use super::ErrorDescriptor;

    descriptor!(
        RESOURCE_NOT_FOUND,
        1004,
        404,
        "Resource not found. The requested resource does not exist."
    );
    descriptor!(VALIDATION_ERROR, 1005, 400, "Validation error.");
    descriptor!(
        MISSING_PARAMETERS,
        1013,
        400,
        "Required parameters were not provided."
    );
    descriptor!(INTERNAL_SERVER_ERROR, 1014, 500, "Internal server error.");
    descriptor!(
        METHOD_NOT_ALLOWED,
        1015,
        405,
        "HTTP method not allowed for this endpoint."
    );
    descriptor!(UNSUPPORTED_MEDIA_TYPE, 1016, 415, "Unsupported media type.");
    descriptor!(RATE_LIMIT_EXCEEDED, 1017, 429, "Rate limit exceeded.");
    descriptor!(INVALID_UUID_FORMAT, 1020, 400, "Invalid UUID format.");
    descriptor!(DATABASE_ERROR, 1023, 500, "Database error.");
    descriptor!(SERVICE_UNAVAILABLE, 1024, 503, "Service unavailable.");
    descriptor!(INVALID_DATE_FORMAT, 1025, 400, "Invalid date format.");
    descriptor!(
        INSUFFICIENT_PERMISSIONS,
        1028,
        403,
        "Insufficient permissions for this operation."
    );
}

/// Every catalog entry, grouped in declaration order
pub static ALL: &[&ErrorDescriptor] = &[
    &auth::AUTHENTICATION_FAILED,
    &auth::TOKEN_EXPIRED,
    &auth::TOKEN_INVALID,
    &auth::ACCESS_DENIED,
    &auth::INVALID_CREDENTIALS_FORMAT,
    &auth::SESSION_EXPIRED,
    &auth::AUTHENTICATION_REQUIRED,
    &company::DUPLICATE_ENTRY,
    &company::COMPANY_NOT_FOUND,
    &company::COMPANY_ID_MISMATCH,
    &user::USER_NOT_FOUND,
    &user::INVALID_ROLE,
    &user::PASSWORD_TOO_WEAK,
    &user::EMAIL_ALREADY_IN_USE,
    &user::USER_ID_MISMATCH,
    &task::TASK_NOT_FOUND,
    &task::INVALID_STATUS,
    &task::TASK_ALREADY_COMPLETED,
    &task::ASSIGNED_USER_NOT_FOUND,
    &general::RESOURCE_NOT_FOUND,
    &general::VALIDATION_ERROR,
    &general::MISSING_PARAMETERS,
    &general::INTERNAL_SERVER_ERROR,
    &general::METHOD_NOT_ALLOWED,
    &general::UNSUPPORTED_MEDIA_TYPE,
    &general::RATE_LIMIT_EXCEEDED,
    &general::INVALID_UUID_FORMAT,
    &general::DATABASE_ERROR,
    &general::SERVICE_UNAVAILABLE,
    &general::INVALID_DATE_FORMAT,
    &general::INSUFFICIENT_PERMISSIONS,
];

/// Look up a descriptor by its numeric code
pub fn find_by_code(code: u16) -> Option<&'static ErrorDescriptor> {
    ALL.iter().copied().find(|descriptor| descriptor.code == code)
}

/// Look up a descriptor by its identifier
pub fn find_by_identifier(identifier: &str) -> Option<&'static ErrorDescriptor> {
    ALL.iter()
        .copied()
        .find(|descriptor| descriptor.identifier == identifier)
}
