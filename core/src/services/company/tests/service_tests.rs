//! Unit tests for the company service

use uuid::Uuid;

use crate::domain::value_objects::PageRequest;
use crate::errors::catalog;
use crate::services::company::CompanyService;
use crate::services::testing::Fixture;

fn service(fixture: &Fixture) -> CompanyService {
    CompanyService::new(fixture.companies.clone())
}

#[tokio::test]
async fn test_create_and_get() {
    let fixture = Fixture::new();
    let service = service(&fixture);

    let created = service.create("Acme".to_string()).await.unwrap();
    let found = service.get(created.id).await.unwrap();
    assert_eq!(found.name, "Acme");
}

#[tokio::test]
async fn test_create_duplicate_name() {
    let fixture = Fixture::new();
    let service = service(&fixture);
    service.create("Acme".to_string()).await.unwrap();

    let err = service.create("Acme".to_string()).await.unwrap_err();
    assert!(err.is(&catalog::company::DUPLICATE_ENTRY));
    assert_eq!(err.http_status(), 409);
}

#[tokio::test]
async fn test_get_missing_company() {
    let fixture = Fixture::new();
    let err = service(&fixture).get(Uuid::new_v4()).await.unwrap_err();

    assert_eq!(err.code(), 1007);
    assert_eq!(err.http_status(), 404);
    assert_eq!(err.effective_message(), "Company not found.");
}

#[tokio::test]
async fn test_rename() {
    let fixture = Fixture::new();
    let service = service(&fixture);
    let company = service.create("Acme".to_string()).await.unwrap();

    let renamed = service
        .update(company.id, Some("Acme Corp".to_string()))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Acme Corp");

    // Keeping the same name is not a conflict
    let same = service
        .update(company.id, Some("Acme Corp".to_string()))
        .await
        .unwrap();
    assert_eq!(same.name, "Acme Corp");
}

#[tokio::test]
async fn test_rename_to_taken_name() {
    let fixture = Fixture::new();
    let service = service(&fixture);
    service.create("Acme".to_string()).await.unwrap();
    let other = service.create("Globex".to_string()).await.unwrap();

    let err = service
        .update(other.id, Some("Acme".to_string()))
        .await
        .unwrap_err();
    assert!(err.is(&catalog::company::DUPLICATE_ENTRY));
}

#[tokio::test]
async fn test_list_and_delete() {
    let fixture = Fixture::new();
    let service = service(&fixture);
    let acme = service.create("Acme".to_string()).await.unwrap();
    service.create("Globex".to_string()).await.unwrap();

    service.delete(acme.id).await.unwrap();

    let page = service.list(&PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Globex");

    let err = service.delete(acme.id).await.unwrap_err();
    assert!(err.is(&catalog::company::COMPANY_NOT_FOUND));
}
