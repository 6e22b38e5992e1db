use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Company, Role, User};
use crate::domain::value_objects::{CurrentUser, Page, PageRequest};
use crate::errors::{catalog, DomainException, DomainResult};
use crate::repositories::{CompanyRepository, UserRepository};
use crate::services::ensure_tenant;
use crate::services::password::{ensure_strong_password, PasswordHasher};

/// Data required to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Partial update of a user; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Membership management inside a company
pub struct UserService {
    users: Arc<dyn UserRepository>,
    companies: Arc<dyn CompanyRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            companies,
            hasher,
        }
    }

    /// Register a user in `company_id`
    ///
    /// # Errors
    ///
    /// * `COMPANY_NOT_FOUND` - the company does not exist
    /// * `PASSWORD_TOO_WEAK` - the password fails the strength rule
    /// * `EMAIL_ALREADY_IN_USE` - another account uses the email
    /// * `INSUFFICIENT_PERMISSIONS` - a non super admin grants `SUPER_ADMIN`
    pub async fn create(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        new_user: NewUser,
    ) -> DomainResult<User> {
        let company = self.company_for(caller, company_id).await?;
        ensure_can_grant(caller, new_user.role)?;
        ensure_strong_password(&new_user.password)?;

        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(DomainException::new(&catalog::user::EMAIL_ALREADY_IN_USE));
        }

        let password_hash = self.hasher.hash(&new_user.password)?;
        let user = User::new(
            company.id,
            new_user.full_name,
            new_user.email,
            password_hash,
            new_user.role,
        );
        let user = self.users.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            company_id = %company.id,
            role = %user.role,
            "User created"
        );
        Ok(user)
    }

    pub async fn get(&self, caller: &CurrentUser, company_id: Uuid, id: Uuid) -> DomainResult<User> {
        let company = self.company_for(caller, company_id).await?;
        self.find_user(company.id, id).await
    }

    pub async fn list(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        page: &PageRequest,
    ) -> DomainResult<Page<User>> {
        let company = self.company_for(caller, company_id).await?;
        self.users.list_by_company(company.id, page).await
    }

    /// Apply `changes` to a user
    ///
    /// An `ADMIN` may not modify another `ADMIN`, and only administrators
    /// may change roles.
    pub async fn update(
        &self,
        caller: &CurrentUser,
        company_id: Uuid,
        id: Uuid,
        changes: UserUpdate,
    ) -> DomainResult<User> {
        let company = self.company_for(caller, company_id).await?;
        let mut user = self.find_user(company.id, id).await?;
        ensure_not_peer_admin(caller, &user)?;

        if let Some(role) = changes.role {
            if role != user.role {
                if caller.role == Role::User {
                    return Err(DomainException::new(
                        &catalog::general::INSUFFICIENT_PERMISSIONS,
                    ));
                }
                ensure_can_grant(caller, role)?;
                user.role = role;
            }
        }

        if let Some(email) = changes.email {
            if email != user.email {
                if self.users.find_by_email(&email).await?.is_some() {
                    return Err(DomainException::new(&catalog::user::EMAIL_ALREADY_IN_USE));
                }
                user.email = email;
            }
        }

        if let Some(password) = changes.password {
            ensure_strong_password(&password)?;
            user.password_hash = self.hasher.hash(&password)?;
        }

        if let Some(full_name) = changes.full_name {
            user.full_name = full_name;
        }

        user.touch();
        self.users.update(user).await
    }

    pub async fn delete(&self, caller: &CurrentUser, company_id: Uuid, id: Uuid) -> DomainResult<()> {
        let company = self.company_for(caller, company_id).await?;
        let user = self.find_user(company.id, id).await?;
        ensure_not_peer_admin(caller, &user)?;

        self.users.delete(company.id, user.id).await?;
        tracing::info!(user_id = %user.id, deleted_by = %caller.id, "User deleted");
        Ok(())
    }

    async fn company_for(&self, caller: &CurrentUser, company_id: Uuid) -> DomainResult<Company> {
        let company = self
            .companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::company::COMPANY_NOT_FOUND))?;
        ensure_tenant(caller, company.id)?;
        Ok(company)
    }

    async fn find_user(&self, company_id: Uuid, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(company_id, id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::user::USER_NOT_FOUND))
    }
}

fn ensure_not_peer_admin(caller: &CurrentUser, target: &User) -> DomainResult<()> {
    if caller.role == Role::Admin && target.role == Role::Admin && caller.id != target.id {
        return Err(DomainException::new(&catalog::general::INSUFFICIENT_PERMISSIONS));
    }
    Ok(())
}

fn ensure_can_grant(caller: &CurrentUser, role: Role) -> DomainResult<()> {
    if role == Role::SuperAdmin && caller.role != Role::SuperAdmin {
        return Err(DomainException::new(&catalog::general::INSUFFICIENT_PERMISSIONS));
    }
    Ok(())
}
