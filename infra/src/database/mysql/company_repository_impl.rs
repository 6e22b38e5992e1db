//! MySQL implementation of the CompanyRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use tm_core::domain::entities::Company;
use tm_core::domain::value_objects::{Page, PageRequest};
use tm_core::errors::{catalog, DomainException, DomainResult};
use tm_core::repositories::CompanyRepository;

use super::{column, database_error, parse_uuid, write_error};

const SELECT_COLUMNS: &str = "SELECT id, name, created_at, updated_at FROM companies";

/// MySQL implementation of CompanyRepository
pub struct MySqlCompanyRepository {
    pool: MySqlPool,
}

impl MySqlCompanyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_company(row: &sqlx::mysql::MySqlRow) -> DomainResult<Company> {
        let id: String = column(row, "id")?;

        Ok(Company {
            id: parse_uuid("companies.id", &id)?,
            name: column(row, "name")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl CompanyRepository for MySqlCompanyRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find company by id", e))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Company>> {
        let query = format!("{} WHERE name = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find company by name", e))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn list(&self, page: &PageRequest) -> DomainResult<Page<Company>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Failed to count companies", e))?;

        let query = format!(
            "{} ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to list companies", e))?;

        let data = rows
            .iter()
            .map(Self::row_to_company)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(data, total.max(0) as u64, page))
    }

    async fn create(&self, company: Company) -> DomainResult<Company> {
        let query = r#"
            INSERT INTO companies (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(company.id.to_string())
            .bind(&company.name)
            .bind(company.created_at)
            .bind(company.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                write_error("Failed to create company", e, &catalog::company::DUPLICATE_ENTRY)
            })?;

        Ok(company)
    }

    async fn update(&self, company: Company) -> DomainResult<Company> {
        let query = r#"
            UPDATE companies
            SET name = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&company.name)
            .bind(company.updated_at)
            .bind(company.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                write_error("Failed to update company", e, &catalog::company::DUPLICATE_ENTRY)
            })?;

        // MySQL reports zero affected rows when nothing changed, so only a
        // missing row is an error.
        if result.rows_affected() == 0 && self.find_by_id(company.id).await?.is_none() {
            return Err(DomainException::new(&catalog::company::COMPANY_NOT_FOUND));
        }

        Ok(company)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        // users and tasks go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to delete company", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainException::new(&catalog::company::COMPANY_NOT_FOUND));
        }

        Ok(())
    }
}
