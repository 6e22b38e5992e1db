//! # TaskHub Core
//!
//! Core business logic for the TaskHub backend: the error catalog, the
//! request authorization pipeline, domain entities, repository contracts
//! and the use-case services built on top of them.

pub mod access;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use access::{AccessPolicy, AuthorizationPipeline, RequestContext, RouteAccess};
pub use domain::*;
pub use errors::{DomainException, DomainResult, ErrorDescriptor};
