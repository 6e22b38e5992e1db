//! Task entity, the unit of work tracked inside a company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{catalog, DomainException};

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = DomainException;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "COMPLETED" => Ok(TaskStatus::Completed),
            _ => Err(DomainException::new(&catalog::task::INVALID_STATUS)),
        }
    }
}

/// A task owned by a company and optionally assigned to one of its users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
    /// User responsible for the task
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new unassigned task
    pub fn new(
        company_id: Uuid,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        due_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_id,
            title,
            description,
            status,
            due_date,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Whether `user_id` is the assignee
    pub fn is_assigned_to(&self, user_id: Uuid) -> bool {
        self.assigned_to == Some(user_id)
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn assign(&mut self, user_id: Uuid) {
        self.assigned_to = Some(user_id);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("IN_PROGRESS".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("DONE".parse::<TaskStatus>().unwrap_err().code(), 1012);
    }

    #[test]
    fn test_assignment() {
        let mut task = Task::new(
            Uuid::new_v4(),
            "Write report".to_string(),
            None,
            TaskStatus::Pending,
            Utc::now(),
        );
        let user_id = Uuid::new_v4();

        assert!(!task.is_assigned_to(user_id));
        task.assign(user_id);
        assert!(task.is_assigned_to(user_id));

        task.set_status(TaskStatus::Completed);
        assert!(task.is_completed());
    }
}
