//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::value_objects::{AuthResponse, CurrentUser};
use crate::errors::{catalog, DomainException, DomainResult};
use crate::repositories::{CompanyRepository, UserRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Authentication service issuing access tokens for email/password logins
pub struct AuthService {
    /// User repository for credential lookup
    users: Arc<dyn UserRepository>,
    /// Company repository used by `me`
    companies: Arc<dyn CompanyRepository>,
    /// Password hash verification
    hasher: Arc<dyn PasswordHasher>,
    /// Token service for JWT management
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `users` - Repository for user data persistence
    /// * `companies` - Repository for company data persistence
    /// * `hasher` - Password hash verification
    /// * `tokens` - Service for JWT token issuance
    pub fn new(
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            companies,
            hasher,
            tokens,
        }
    }

    /// Authenticate with email and password
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Access token and the user's company
    /// * `Err(DomainException)` - `USER_NOT_FOUND` for an unknown email,
    ///   `AUTHENTICATION_FAILED` for a wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::user::USER_NOT_FOUND))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(DomainException::new(&catalog::auth::AUTHENTICATION_FAILED));
        }

        let access_token = self.tokens.encode(&CurrentUser::from(&user))?;
        tracing::info!(user_id = %user.id, company_id = %user.company_id, "User logged in");

        Ok(AuthResponse::new(access_token, user.company_id))
    }

    /// Resolve the stored record of the authenticated caller
    pub async fn me(&self, caller: &CurrentUser) -> DomainResult<User> {
        let company = self
            .companies
            .find_by_id(caller.company_id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::company::COMPANY_NOT_FOUND))?;

        self.users
            .find_by_id(company.id, caller.id)
            .await?
            .ok_or_else(|| DomainException::new(&catalog::user::USER_NOT_FOUND))
    }
}
