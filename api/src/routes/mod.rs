//! HTTP route handlers
//!
//! Handlers only translate between HTTP and the use-case services; access
//! control is declared per route in [`crate::app::configure_routes`].

pub mod auth;
pub mod company;
pub mod health;
pub mod task;
pub mod user;
