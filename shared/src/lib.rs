//! Shared utilities and common types for the TaskHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Pagination types shared by list endpoints

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use types::{Page, PageRequest};
