//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use tm_core::domain::entities::{Role, User};
use tm_core::domain::value_objects::{Page, PageRequest};
use tm_core::errors::{catalog, DomainException, DomainResult};
use tm_core::repositories::UserRepository;

use super::{column, database_error, parse_uuid, write_error};

const SELECT_COLUMNS: &str = r#"
    SELECT id, company_id, full_name, email, password_hash, role, created_at, updated_at
    FROM users
"#;

/// MySQL implementation of UserRepository
///
/// Email uniqueness is enforced by the `uk_users_email` index; a violation
/// surfaces as `EMAIL_ALREADY_IN_USE`.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> DomainResult<User> {
        let id: String = column(row, "id")?;
        let company_id: String = column(row, "company_id")?;
        let role: String = column(row, "role")?;

        Ok(User {
            id: parse_uuid("users.id", &id)?,
            company_id: parse_uuid("users.company_id", &company_id)?,
            full_name: column(row, "full_name")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            role: role.parse::<Role>().map_err(|_| {
                tracing::error!(role = %role, "Unknown role stored in database");
                DomainException::new(&catalog::general::DATABASE_ERROR)
            })?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<User>> {
        let query = format!("{} WHERE id = ? AND company_id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .bind(company_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn list_by_company(
        &self,
        company_id: Uuid,
        page: &PageRequest,
    ) -> DomainResult<Page<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE company_id = ?")
            .bind(company_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Failed to count users", e))?;

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
            .map_err(|e| database_error("Failed to list users", e))?;

        let data = rows
            .iter()
            .map(Self::row_to_user)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(data, total.max(0) as u64, page))
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let query = r#"
            INSERT INTO users (
                id, company_id, full_name, email, password_hash, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(user.company_id.to_string())
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("Failed to create user", e, &catalog::user::EMAIL_ALREADY_IN_USE))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let query = r#"
            UPDATE users
            SET full_name = ?, email = ?, password_hash = ?, role = ?, updated_at = ?
            WHERE id = ? AND company_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .bind(user.company_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("Failed to update user", e, &catalog::user::EMAIL_ALREADY_IN_USE))?;

        if result.rows_affected() == 0
            && self.find_by_id(user.company_id, user.id).await?.is_none()
        {
            return Err(DomainException::new(&catalog::user::USER_NOT_FOUND));
        }

        Ok(user)
    }

    async fn delete(&self, company_id: Uuid, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND company_id = ?")
            .bind(id.to_string())
            .bind(company_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainException::new(&catalog::user::USER_NOT_FOUND));
        }

        Ok(())
    }
}
