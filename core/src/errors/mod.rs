//! Error catalog and the domain exception raised by business logic.
//!
//! Every failure a client can observe is described by exactly one
//! [`ErrorDescriptor`] from [`catalog`]. Business code raises a
//! [`DomainException`] pointing at a descriptor; the HTTP edge turns it
//! into the uniform error envelope.

pub mod catalog;
mod exception;

#[cfg(test)]
mod tests;

pub use catalog::ErrorDescriptor;
pub use exception::DomainException;

/// Result alias used by services and repositories
pub type DomainResult<T> = Result<T, DomainException>;
