//! Business services containing domain logic and use cases.

pub mod auth;
pub mod company;
pub mod password;
pub mod task;
pub mod token;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use auth::AuthService;
pub use company::CompanyService;
pub use password::PasswordHasher;
pub use task::{NewTask, TaskService, TaskUpdate};
pub use token::{JwtTokenService, TokenService, TokenServiceConfig};
pub use user::{NewUser, UserService, UserUpdate};

use uuid::Uuid;

use crate::domain::entities::Role;
use crate::domain::value_objects::CurrentUser;
use crate::errors::{catalog, DomainException, DomainResult};

/// Callers other than `SUPER_ADMIN` may only act inside their own company
pub(crate) fn ensure_tenant(caller: &CurrentUser, company_id: Uuid) -> DomainResult<()> {
    if caller.role == Role::SuperAdmin || caller.belongs_to(company_id) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = %caller.id,
            target_company = %company_id,
            "Cross-tenant access rejected"
        );
        Err(DomainException::new(&catalog::company::COMPANY_ID_MISMATCH))
    }
}
