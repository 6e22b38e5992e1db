//! Login and caller introspection.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
