//! bcrypt-backed implementation of `PasswordHasher`.

use tm_core::errors::DomainResult;
use tm_core::services::PasswordHasher;

use crate::InfrastructureError;

/// Password hasher using bcrypt with a configurable work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| InfrastructureError::Hashing(e).into())
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        match bcrypt::verify(password, hash) {
            Ok(matches) => Ok(matches),
            // A malformed stored hash never matches
            Err(bcrypt::BcryptError::InvalidHash(_)) => Ok(false),
            Err(e) => Err(InfrastructureError::Hashing(e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_core::errors::catalog;

    // Minimum cost keeps the tests fast
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash("Str0ng!pass").unwrap();

        assert_ne!(hash, "Str0ng!pass");
        assert!(hash.starts_with("$2"));
        assert!(hasher.verify("Str0ng!pass", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("Str0ng!pass").unwrap();
        let second = hasher.hash("Str0ng!pass").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_does_not_match() {
        assert!(!hasher().verify("Str0ng!pass", "not-a-hash").unwrap());
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let err = BcryptPasswordHasher::new(2).hash("Str0ng!pass").unwrap_err();
        assert!(err.is(&catalog::general::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(BcryptPasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}
