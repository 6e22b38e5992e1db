//! MySQL connection pool.

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tm_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Shared MySQL connection pool
#[derive(Clone, Debug)]
pub struct DatabasePool {
    pool: MySqlPool,
    max_connections: u32,
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}

impl DatabasePool {
    /// Open a pool using the given configuration
    ///
    /// Fails fast when the URL is malformed or the server cannot be reached
    /// within `connect_timeout` seconds.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        if config.max_connections == 0 {
            return Err(InfrastructureError::Config(
                "max_connections must be greater than zero".to_string(),
            ));
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "MySQL connection pool established"
        );

        Ok(Self {
            pool,
            max_connections: config.max_connections,
        })
    }

    /// The underlying SQLx pool
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    /// Run a trivial query to check the server is reachable
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(value == 1)
    }

    /// Apply pending migrations from `infra/migrations`
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.max_connections,
        }
    }

    /// Close all connections; used during graceful shutdown
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
