//! In-memory implementation of CompanyRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Company;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::{catalog, DomainException, DomainResult};

use super::trait_::CompanyRepository;

/// Company repository backed by a process-local map
#[derive(Clone, Default)]
pub struct InMemoryCompanyRepository {
    companies: Arc<RwLock<HashMap<Uuid, Company>>>,
}

impl InMemoryCompanyRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>> {
        let companies = self.companies.read().await;
        Ok(companies.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Company>> {
        let companies = self.companies.read().await;
        Ok(companies.values().find(|c| c.name == name).cloned())
    }

    async fn list(&self, page: &PageRequest) -> DomainResult<Page<Company>> {
        let companies = self.companies.read().await;
        let mut all: Vec<Company> = companies.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = all.len() as u64;
        let data = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(data, total, page))
    }

    async fn create(&self, company: Company) -> DomainResult<Company> {
        let mut companies = self.companies.write().await;

        if companies.values().any(|c| c.name == company.name) {
            return Err(DomainException::new(&catalog::company::DUPLICATE_ENTRY));
        }

        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn update(&self, company: Company) -> DomainResult<Company> {
        let mut companies = self.companies.write().await;

        if !companies.contains_key(&company.id) {
            return Err(DomainException::new(&catalog::company::COMPANY_NOT_FOUND));
        }
        if companies
            .values()
            .any(|c| c.id != company.id && c.name == company.name)
        {
            return Err(DomainException::new(&catalog::company::DUPLICATE_ENTRY));
        }

        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut companies = self.companies.write().await;
        companies
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainException::new(&catalog::company::COMPANY_NOT_FOUND))
    }
}
