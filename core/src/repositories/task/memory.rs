//! In-memory implementation of TaskRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Task;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::{catalog, DomainException, DomainResult};

use super::trait_::TaskRepository;

/// Task repository backed by a process-local map
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .get(&id)
            .filter(|t| t.company_id == company_id)
            .cloned())
    }

    async fn list_by_company(
        &self,
        company_id: Uuid,
        page: &PageRequest,
    ) -> DomainResult<Page<Task>> {
        let tasks = self.tasks.read().await;
        let mut owned: Vec<Task> = tasks
            .values()
            .filter(|t| t.company_id == company_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = owned.len() as u64;
        let data = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(data, total, page))
    }

    async fn create(&self, task: Task) -> DomainResult<Task> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: Task) -> DomainResult<Task> {
        let mut tasks = self.tasks.write().await;

        match tasks.get_mut(&task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(task)
            }
            None => Err(DomainException::new(&catalog::task::TASK_NOT_FOUND)),
        }
    }

    async fn delete(&self, company_id: Uuid, id: Uuid) -> DomainResult<()> {
        let mut tasks = self.tasks.write().await;

        match tasks.get(&id) {
            Some(task) if task.company_id == company_id => {
                tasks.remove(&id);
                Ok(())
            }
            _ => Err(DomainException::new(&catalog::task::TASK_NOT_FOUND)),
        }
    }
}
