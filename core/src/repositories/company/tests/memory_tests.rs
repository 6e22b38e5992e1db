//! Unit tests for the in-memory company repository

use crate::domain::entities::Company;
use crate::domain::value_objects::PageRequest;
use crate::errors::catalog;
use crate::repositories::company::{CompanyRepository, InMemoryCompanyRepository};

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryCompanyRepository::new();
    let company = repo.create(Company::new("Acme".to_string())).await.unwrap();

    let by_id = repo.find_by_id(company.id).await.unwrap();
    assert_eq!(by_id.as_ref().map(|c| c.name.as_str()), Some("Acme"));

    let by_name = repo.find_by_name("Acme").await.unwrap();
    assert_eq!(by_name.map(|c| c.id), Some(company.id));
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let repo = InMemoryCompanyRepository::new();
    repo.create(Company::new("Acme".to_string())).await.unwrap();

    let err = repo
        .create(Company::new("Acme".to_string()))
        .await
        .unwrap_err();
    assert!(err.is(&catalog::company::DUPLICATE_ENTRY));
}

#[tokio::test]
async fn test_list_paginates() {
    let repo = InMemoryCompanyRepository::new();
    for name in ["A", "B", "C"] {
        repo.create(Company::new(name.to_string())).await.unwrap();
    }

    let page = repo.list(&PageRequest::new(2, 2)).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.in_page, 1);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.per_page, 2);
}

#[tokio::test]
async fn test_delete_missing_company() {
    let repo = InMemoryCompanyRepository::new();
    let err = repo.delete(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(err.is(&catalog::company::COMPANY_NOT_FOUND));
}
