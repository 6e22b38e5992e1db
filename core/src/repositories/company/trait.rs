//! Company repository trait defining the interface for company persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Company;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::DomainResult;

/// Repository trait for Company entity persistence operations
///
/// Implementations report storage failures as `DATABASE_ERROR` and a
/// violated name uniqueness constraint as `DUPLICATE_ENTRY`.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find a company by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Company))` - Company found
    /// * `Ok(None)` - No company with that id
    /// * `Err(DomainException)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>>;

    /// Find a company by its exact name
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Company>>;

    /// List companies ordered by creation time
    async fn list(&self, page: &PageRequest) -> DomainResult<Page<Company>>;

    /// Persist a new company
    async fn create(&self, company: Company) -> DomainResult<Company>;

    /// Replace an existing company
    ///
    /// # Returns
    /// * `Err(DomainException)` - `COMPANY_NOT_FOUND` if it does not exist
    async fn update(&self, company: Company) -> DomainResult<Company>;

    /// Delete a company together with its users and tasks
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
