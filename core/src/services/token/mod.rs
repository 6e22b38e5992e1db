//! Token service module for JWT management
//!
//! Access tokens carry the caller identity (`CurrentUser`) and are signed
//! with HS256. The [`TokenService`] trait is what the authorization
//! pipeline depends on; [`JwtTokenService`] is the production
//! implementation.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{JwtTokenService, TokenService};
