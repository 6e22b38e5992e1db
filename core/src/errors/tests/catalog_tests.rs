//! Unit tests for the error catalog

use std::collections::HashSet;

use crate::errors::catalog::{self, auth, company, general, task, user, ALL};

#[test]
fn test_codes_are_unique() {
    let mut seen = HashSet::new();
    for descriptor in ALL {
        assert!(
            seen.insert(descriptor.code),
            "duplicate code {}",
            descriptor.code
        );
    }
}

#[test]
fn test_identifiers_are_unique() {
    let mut seen = HashSet::new();
    for descriptor in ALL {
        assert!(
            seen.insert(descriptor.identifier),
            "duplicate identifier {}",
            descriptor.identifier
        );
    }
}

#[test]
fn test_statuses_are_client_or_server_errors() {
    for descriptor in ALL {
        assert!(
            (400..600).contains(&descriptor.http_status),
            "{} has status {}",
            descriptor.identifier,
            descriptor.http_status
        );
        assert!(!descriptor.message.is_empty());
    }
}

#[test]
fn test_catalog_contains_every_entry() {
    assert_eq!(ALL.len(), 31);
}

#[test]
fn test_status_semantics() {
    assert_eq!(company::COMPANY_NOT_FOUND.http_status, 404);
    assert_eq!(company::DUPLICATE_ENTRY.http_status, 409);
    assert_eq!(user::EMAIL_ALREADY_IN_USE.http_status, 409);
    assert_eq!(general::VALIDATION_ERROR.http_status, 400);
    assert_eq!(auth::TOKEN_INVALID.http_status, 401);
    assert_eq!(auth::AUTHENTICATION_REQUIRED.http_status, 401);
    assert_eq!(auth::INVALID_CREDENTIALS_FORMAT.http_status, 401);
    assert_eq!(auth::ACCESS_DENIED.http_status, 403);
    assert_eq!(general::DATABASE_ERROR.http_status, 500);
    assert_eq!(task::TASK_ALREADY_COMPLETED.http_status, 400);
}

#[test]
fn test_identifier_matches_constant_name() {
    assert_eq!(auth::TOKEN_INVALID.identifier, "TOKEN_INVALID");
    assert_eq!(task::ASSIGNED_USER_NOT_FOUND.identifier, "ASSIGNED_USER_NOT_FOUND");
}

#[test]
fn test_lookup() {
    let found = catalog::find_by_code(1007).unwrap();
    assert_eq!(found.identifier, "COMPANY_NOT_FOUND");
    assert!(catalog::find_by_code(9999).is_none());

    let found = catalog::find_by_identifier("RATE_LIMIT_EXCEEDED").unwrap();
    assert_eq!(found.code, 1017);
    assert_eq!(found.http_status, 429);
}
