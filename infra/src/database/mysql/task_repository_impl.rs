//! MySQL implementation of the TaskRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use tm_core::domain::entities::{Task, TaskStatus};
use tm_core::domain::value_objects::{Page, PageRequest};
use tm_core::errors::{catalog, DomainException, DomainResult};
use tm_core::repositories::TaskRepository;

use super::{column, database_error, parse_uuid};

const SELECT_COLUMNS: &str = r#"
    SELECT id, company_id, title, description, status, due_date, assigned_to,
           created_at, updated_at
    FROM tasks
"#;

/// MySQL implementation of TaskRepository
pub struct MySqlTaskRepository {
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::mysql::MySqlRow) -> DomainResult<Task> {
        let id: String = column(row, "id")?;
        let company_id: String = column(row, "company_id")?;
        let assigned_to: Option<String> = column(row, "assigned_to")?;
        let status: String = column(row, "status")?;

        Ok(Task {
            id: parse_uuid("tasks.id", &id)?,
            company_id: parse_uuid("tasks.company_id", &company_id)?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            status: status.parse::<TaskStatus>().map_err(|_| {
                tracing::error!(status = %status, "Unknown task status stored in database");
                DomainException::new(&catalog::general::DATABASE_ERROR)
            })?,
            due_date: column::<DateTime<Utc>>(row, "due_date")?,
            assigned_to: assigned_to
                .as_deref()
                .map(|value| parse_uuid("tasks.assigned_to", value))
                .transpose()?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<Task>> {
        let query = format!("{} WHERE id = ? AND company_id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .bind(company_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find task by id", e))?;

        row.as_ref().map(Self::row_to_task).transpose()
    }

    async fn list_by_company(
        &self,
        company_id: Uuid,
        page: &PageRequest,
    ) -> DomainResult<Page<Task>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE company_id = ?")
            .bind(company_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Failed to count tasks", e))?;

        let query = format!(
            "{} WHERE company_id = ? ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(company_id.to_string())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to list tasks", e))?;

        let data = rows
            .iter()
            .map(Self::row_to_task)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(data, total.max(0) as u64, page))
    }

    async fn create(&self, task: Task) -> DomainResult<Task> {
        let query = r#"
            INSERT INTO tasks (
                id, company_id, title, description, status, due_date, assigned_to,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(task.id.to_string())
            .bind(task.company_id.to_string())
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.due_date)
            .bind(task.assigned_to.map(|id| id.to_string()))
            .bind(task.created_at)
            .bind(task.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to create task", e))?;

        Ok(task)
    }

    async fn update(&self, task: Task) -> DomainResult<Task> {
        let query = r#"
            UPDATE tasks
            SET title = ?, description = ?, status = ?, due_date = ?, assigned_to = ?,
                updated_at = ?
            WHERE id = ? AND company_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.due_date)
            .bind(task.assigned_to.map(|id| id.to_string()))
            .bind(task.updated_at)
            .bind(task.id.to_string())
            .bind(task.company_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to update task", e))?;

        if result.rows_affected() == 0
            && self.find_by_id(task.company_id, task.id).await?.is_none()
        {
            return Err(DomainException::new(&catalog::task::TASK_NOT_FOUND));
        }

        Ok(task)
    }

    async fn delete(&self, company_id: Uuid, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND company_id = ?")
            .bind(id.to_string())
            .bind(company_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to delete task", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainException::new(&catalog::task::TASK_NOT_FOUND));
        }

        Ok(())
    }
}
