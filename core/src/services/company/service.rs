use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Company;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::{catalog, DomainException, DomainResult};
use crate::repositories::CompanyRepository;

/// Tenant lifecycle: create, read, rename, delete
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// Create a company with a unique name
    pub async fn create(&self, name: String) -> DomainResult<Company> {
        if self.companies.find_by_name(&name).await?.is_some() {
            return Err(DomainException::new(&catalog::company::DUPLICATE_ENTRY));
        }

        let company = self.companies.create(Company::new(name)).await?;
        tracing::info!(company_id = %company.id, "Company created");
        Ok(company)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Company> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::company::COMPANY_NOT_FOUND))
    }

    pub async fn list(&self, page: &PageRequest) -> DomainResult<Page<Company>> {
        self.companies.list(page).await
    }

    /// Rename a company; the new name must not belong to another company
    pub async fn update(&self, id: Uuid, name: Option<String>) -> DomainResult<Company> {
        let mut company = self.get(id).await?;

        if let Some(name) = name {
            if let Some(existing) = self.companies.find_by_name(&name).await? {
                if existing.id != company.id {
                    return Err(DomainException::new(&catalog::company::DUPLICATE_ENTRY));
                }
            }
            company.rename(name);
        }

        self.companies.update(company).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let company = self.get(id).await?;
        self.companies.delete(company.id).await?;
        tracing::info!(company_id = %company.id, "Company deleted");
        Ok(())
    }
}
