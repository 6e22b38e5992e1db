//! Request authorization.
//!
//! Every protected route declares a [`RouteAccess`]: whether it is public,
//! which roles may call it and which [`AccessPolicy`] predicates must hold.
//! The [`AuthorizationPipeline`] evaluates a declaration against a
//! [`RequestContext`] in a fixed order and fails fast with a
//! `DomainException`.

mod context;
mod pipeline;
mod policy;
mod route;


pub use context::RequestContext;
pub use pipeline::{parse_bearer, AuthorizationPipeline};
pub use policy::AccessPolicy;
pub use route::RouteAccess;
