//! Fixtures shared by service tests

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Company, Role, User};
use crate::domain::value_objects::CurrentUser;
use crate::errors::DomainResult;
use crate::repositories::{
    CompanyRepository, InMemoryCompanyRepository, InMemoryTaskRepository,
    InMemoryUserRepository, UserRepository,
};
use crate::services::password::PasswordHasher;

/// Reversible "hash" so tests stay fast
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        Ok(hash == format!("plain:{password}"))
    }
}

pub struct Fixture {
    pub companies: Arc<InMemoryCompanyRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub hasher: Arc<PlainHasher>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            companies: Arc::new(InMemoryCompanyRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
            hasher: Arc::new(PlainHasher),
        }
    }

    pub async fn company(&self, name: &str) -> Company {
        self.companies
            .create(Company::new(name.to_string()))
            .await
            .unwrap()
    }

    pub async fn member(&self, company_id: Uuid, email: &str, role: Role) -> User {
        let user = User::new(
            company_id,
            format!("Member {email}"),
            email.to_string(),
            self.hasher.hash("Str0ng!pass").unwrap(),
            role,
        );
        self.users.create(user).await.unwrap()
    }
}

pub fn as_caller(user: &User) -> CurrentUser {
    CurrentUser::from(user)
}

pub fn super_admin() -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        name: "Root".to_string(),
        email: "root@example.com".to_string(),
        role: Role::SuperAdmin,
    }
}
