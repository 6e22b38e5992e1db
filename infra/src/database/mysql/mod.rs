//! MySQL implementations of the repository traits

mod company_repository_impl;
mod task_repository_impl;
mod user_repository_impl;

pub use company_repository_impl::MySqlCompanyRepository;
pub use task_repository_impl::MySqlTaskRepository;
pub use user_repository_impl::MySqlUserRepository;

use tm_core::errors::{catalog, DomainException, ErrorDescriptor};
use uuid::Uuid;

/// Wrap a driver failure as `DATABASE_ERROR`, logging the cause
pub(crate) fn database_error(context: &str, err: sqlx::Error) -> DomainException {
    tracing::error!(error = %err, "{}", context);
    DomainException::new(&catalog::general::DATABASE_ERROR)
}

/// Map a write failure, turning unique-key violations into `duplicate`
pub(crate) fn write_error(
    context: &str,
    err: sqlx::Error,
    duplicate: &'static ErrorDescriptor,
) -> DomainException {
    if is_unique_violation(&err) {
        return DomainException::new(duplicate);
    }
    database_error(context, err)
}

/// MySQL reports duplicate keys as error 1062
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// Parse a `CHAR(36)` id column
pub(crate) fn parse_uuid(column: &str, value: &str) -> Result<Uuid, DomainException> {
    Uuid::parse_str(value).map_err(|e| {
        tracing::error!(column, error = %e, "Invalid UUID stored in database");
        DomainException::new(&catalog::general::DATABASE_ERROR)
    })
}

/// Read a column, mapping decode failures to `DATABASE_ERROR`
pub(crate) fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainException>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    use sqlx::Row;
    row.try_get(name)
        .map_err(|e| database_error(&format!("Failed to get {}", name), e))
}
