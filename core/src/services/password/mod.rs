//! Password hashing contract and strength rules.

mod strength;

pub use strength::{ensure_strong_password, is_strong_password, MIN_PASSWORD_LENGTH};

use crate::errors::DomainResult;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password for storage
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plain text password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}
