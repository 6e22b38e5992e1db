use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Company, Role, Task, TaskStatus};
use crate::domain::value_objects::{CurrentUser, Page, PageRequest};
use crate::errors::{catalog, DomainException, DomainResult};
use crate::repositories::{CompanyRepository, TaskRepository, UserRepository};
use crate::services::ensure_tenant;

/// Data required to open a task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

/// Partial update of a task; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Task lifecycle inside a company
///
/// A `USER` may only edit tasks assigned to them. Completed tasks are
/// frozen except for deletion.
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl TaskService {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            tasks,
            users,
            companies,
        }
    }

    pub async fn create(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        new_task: NewTask,
    ) -> DomainResult<Task> {
        let company = self.company_for(caller, company_id).await?;
        let task = Task::new(
            company.id,
            new_task.title,
            new_task.description,
            new_task.status,
            new_task.due_date,
        );

        let task = self.tasks.create(task).await?;
        tracing::info!(task_id = %task.id, company_id = %company.id, "Task created");
        Ok(task)
    }

    pub async fn get(&self, caller: &CurrentUser, company_id: Uuid, id: Uuid) -> DomainResult<Task> {
        let company = self.company_for(caller, company_id).await?;
        self.find_task(company.id, id).await
    }

    pub async fn list(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        page: &PageRequest,
    ) -> DomainResult<Page<Task>> {
        let company = self.company_for(caller, company_id).await?;
        self.tasks.list_by_company(company.id, page).await
    }

    pub async fn update(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        id: Uuid,
        changes: TaskUpdate,
    ) -> DomainResult<Task> {
        let mut task = self.editable_task(caller, company_id, id).await?;

        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = Some(description);
        }
        if let Some(due_date) = changes.due_date {
            task.due_date = due_date;
        }
        match changes.status {
            Some(status) => task.set_status(status),
            None => task.updated_at = Utc::now(),
        }

        self.tasks.update(task).await
    }

    pub async fn update_status(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        id: Uuid,
        status: TaskStatus,
    ) -> DomainResult<Task> {
        let mut task = self.editable_task(caller, company_id, id).await?;
        task.set_status(status);

        let task = self.tasks.update(task).await?;
        tracing::info!(task_id = %task.id, status = task.status.as_str(), "Task status changed");
        Ok(task)
    }

    /// Assign a task to a member of the same company
    pub async fn assign(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        id: Uuid,
        user_id: Uuid,
    ) -> DomainResult<Task> {
        let mut task = self.editable_task(caller, company_id, id).await?;

        let assignee = self
            .users
            .find_by_id(task.company_id, user_id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::task::ASSIGNED_USER_NOT_FOUND))?;
        task.assign(assignee.id);

        let task = self.tasks.update(task).await?;
        tracing::info!(task_id = %task.id, assignee = %assignee.id, "Task assigned");
        Ok(task)
    }

    pub async fn delete(&self, caller: &CurrentUser, company_id: Uuid, id: Uuid) -> DomainResult<()> {
        let company = self.company_for(caller, company_id).await?;
        let task = self.find_task(company.id, id).await?;

        self.tasks.delete(company.id, task.id).await?;
        tracing::info!(task_id = %task.id, deleted_by = %caller.id, "Task deleted");
        Ok(())
    }

    /// Load a task the caller is allowed to modify
    async fn editable_task(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        id: Uuid,
    ) -> DomainResult<Task> {
        let company = self.company_for(caller, company_id).await?;
        let task = self.find_task(company.id, id).await?;

        if caller.role == Role::User && !task.is_assigned_to(caller.id) {
            return Err(DomainException::new(&catalog::general::INSUFFICIENT_PERMISSIONS));
        }
        if task.is_completed() {
            return Err(DomainException::new(&catalog::task::TASK_ALREADY_COMPLETED));
        }
        Ok(task)
    }

    async fn company_for(&self, caller: &CurrentUser, company_id: Uuid) -> DomainResult<Company> {
        let company = self
            .companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::company::COMPANY_NOT_FOUND))?;
        ensure_tenant(caller, company.id)?;
        Ok(company)
    }

    async fn find_task(&self, company_id: Uuid, id: Uuid) -> DomainResult<Task> {
        self.tasks
            .find_by_id(company_id, id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::task::TASK_NOT_FOUND))
    }
}
