//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Repository implementations for companies, users and tasks
//! - Schema migrations (embedded from `infra/migrations`)

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlCompanyRepository, MySqlTaskRepository, MySqlUserRepository};
