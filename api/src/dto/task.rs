use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tm_core::domain::entities::TaskStatus;
use tm_core::errors::{catalog, DomainException, DomainResult};
use tm_core::services::{NewTask, TaskUpdate};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `PENDING`
    pub status: Option<String>,
    /// RFC 3339 timestamp
    pub due_date: String,
}

impl CreateTaskRequest {
    pub fn into_new_task(self) -> DomainResult<NewTask> {
        Ok(NewTask {
            title: self.title,
            description: self.description,
            status: match self.status {
                Some(status) => status.parse::<TaskStatus>()?,
                None => TaskStatus::Pending,
            },
            due_date: parse_due_date(&self.due_date)?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
}

impl UpdateTaskRequest {
    pub fn into_update(self) -> DomainResult<TaskUpdate> {
        Ok(TaskUpdate {
            title: self.title,
            description: self.description,
            status: self.status.map(|s| s.parse::<TaskStatus>()).transpose()?,
            due_date: self.due_date.as_deref().map(parse_due_date).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTaskStatusRequest {
    pub status: String,
}

impl UpdateTaskStatusRequest {
    pub fn status(&self) -> DomainResult<TaskStatus> {
        self.status.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignTaskRequest {
    pub user_id: String,
}

impl AssignTaskRequest {
    pub fn user_id(&self) -> DomainResult<Uuid> {
        Uuid::parse_str(&self.user_id)
            .map_err(|_| DomainException::new(&catalog::general::INVALID_UUID_FORMAT))
    }
}

fn parse_due_date(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| DomainException::new(&catalog::general::INVALID_DATE_FORMAT))
}
