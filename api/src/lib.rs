//! HTTP surface of TaskHub.
//!
//! Exposes the application factory so the binary and the integration tests
//! build exactly the same app.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, HttpSettings};
