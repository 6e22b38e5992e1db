//! User repository trait defining the interface for user data persistence.
//!
//! Users always live inside a company, so every lookup except the login
//! lookup by email is scoped by `company_id`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use tm_core::domain::entities::User;
/// use tm_core::domain::value_objects::{Page, PageRequest};
/// use tm_core::errors::DomainResult;
/// use tm_core::repositories::UserRepository;
///
/// struct PostgresUserRepository;
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<User>> {
///         Ok(None)
///     }
///     // ... other methods
/// #   async fn find_by_email(&self, _: &str) -> DomainResult<Option<User>> { Ok(None) }
/// #   async fn list_by_company(&self, _: Uuid, p: &PageRequest) -> DomainResult<Page<User>> { Ok(Page::new(vec![], 0, p)) }
/// #   async fn create(&self, u: User) -> DomainResult<User> { Ok(u) }
/// #   async fn update(&self, u: User) -> DomainResult<User> { Ok(u) }
/// #   async fn delete(&self, _: Uuid, _: Uuid) -> DomainResult<()> { Ok(()) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user of `company_id` by id
    ///
    /// # Arguments
    /// * `company_id` - Company the user must belong to
    /// * `id` - The user's unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found in that company
    /// * `Ok(None)` - No such user in that company
    /// * `Err(DomainException)` - Storage failure
    async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by login email across all companies
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// List the users of a company ordered by creation time
    async fn list_by_company(&self, company_id: Uuid, page: &PageRequest)
        -> DomainResult<Page<User>>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Err(DomainException)` - `EMAIL_ALREADY_IN_USE` when the email is taken
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Replace an existing user
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Delete a user of `company_id`
    async fn delete(&self, company_id: Uuid, id: Uuid) -> DomainResult<()>;
}
