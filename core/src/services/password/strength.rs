use crate::errors::{catalog, DomainException, DomainResult};

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// At least eight characters with a lowercase letter, an uppercase letter,
/// a digit and a symbol.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Fails with `PASSWORD_TOO_WEAK` unless [`is_strong_password`] holds
pub fn ensure_strong_password(password: &str) -> DomainResult<()> {
    if is_strong_password(password) {
        Ok(())
    } else {
        Err(DomainException::new(&catalog::user::PASSWORD_TOO_WEAK))
    }
}
