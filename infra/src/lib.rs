//! # Infrastructure Layer
//!
//! Concrete implementations of the contracts defined in `tm_core`:
//!
//! - **Database**: MySQL repositories for companies, users and tasks using SQLx
//! - **Security**: bcrypt password hashing
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use std::sync::Arc;

use tm_core::errors::{catalog, DomainException};
use tm_shared::config::DatabaseConfig;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Password hashing implementations
pub mod security;

#[cfg(feature = "mysql")]
use database::{DatabasePool, MySqlCompanyRepository, MySqlTaskRepository, MySqlUserRepository};
pub use security::BcryptPasswordHasher;

/// Repositories and collaborators backed by real infrastructure
#[cfg(feature = "mysql")]
#[derive(Clone)]
pub struct InfrastructureServices {
    pub pool: DatabasePool,
    pub companies: Arc<MySqlCompanyRepository>,
    pub users: Arc<MySqlUserRepository>,
    pub tasks: Arc<MySqlTaskRepository>,
    pub password_hasher: Arc<BcryptPasswordHasher>,
}

/// Initialize infrastructure services
///
/// This function:
/// - Opens the MySQL connection pool
/// - Applies pending schema migrations
/// - Builds the MySQL repositories on top of the pool
#[cfg(feature = "mysql")]
pub async fn initialize(
    config: &DatabaseConfig,
) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let pool = DatabasePool::new(config.clone()).await?;
    pool.run_migrations().await?;

    let services = InfrastructureServices {
        companies: Arc::new(MySqlCompanyRepository::new(pool.inner().clone())),
        users: Arc::new(MySqlUserRepository::new(pool.inner().clone())),
        tasks: Arc::new(MySqlTaskRepository::new(pool.inner().clone())),
        password_hasher: Arc::new(BcryptPasswordHasher::default()),
        pool,
    };

    tracing::info!("Infrastructure services initialized successfully");

    Ok(services)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password hashing error
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl From<InfrastructureError> for DomainException {
    fn from(err: InfrastructureError) -> Self {
        tracing::error!(error = %err, "Infrastructure failure");
        match err {
            InfrastructureError::Hashing(_) | InfrastructureError::Config(_) => {
                DomainException::new(&catalog::general::INTERNAL_SERVER_ERROR)
            }
            _ => DomainException::new(&catalog::general::DATABASE_ERROR),
        }
    }
}
