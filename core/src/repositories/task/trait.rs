//! Task repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Task;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::DomainResult;

/// Repository trait for Task entity persistence operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task of `company_id` by id
    async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<Task>>;

    /// List the tasks of a company ordered by creation time
    async fn list_by_company(&self, company_id: Uuid, page: &PageRequest)
        -> DomainResult<Page<Task>>;

    async fn create(&self, task: Task) -> DomainResult<Task>;

    async fn update(&self, task: Task) -> DomainResult<Task>;

    async fn delete(&self, company_id: Uuid, id: Uuid) -> DomainResult<()>;
}
