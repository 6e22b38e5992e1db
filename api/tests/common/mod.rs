//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use tm_api::AppState;
use tm_core::domain::entities::{Company, Role, User};
use tm_core::domain::value_objects::CurrentUser;
use tm_core::repositories::{
    CompanyRepository, InMemoryCompanyRepository, InMemoryTaskRepository,
    InMemoryUserRepository, UserRepository,
};
use tm_core::services::{JwtTokenService, PasswordHasher, TokenService, TokenServiceConfig};
use tm_infra::security::BcryptPasswordHasher;

pub const PASSWORD: &str = "S3cure!pass";

pub struct TestContext {
    pub state: AppState,
    pub companies: Arc<InMemoryCompanyRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub hasher: Arc<BcryptPasswordHasher>,
    pub tokens: Arc<JwtTokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let companies = Arc::new(InMemoryCompanyRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let hasher = Arc::new(BcryptPasswordHasher::new(4));
        let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::new(
            "integration-test-secret",
        )));

        let state = AppState::new(
            companies.clone(),
            users.clone(),
            tasks.clone(),
            hasher.clone(),
            tokens.clone(),
        );

        Self {
            state,
            companies,
            users,
            tasks,
            hasher,
            tokens,
        }
    }

    pub async fn company(&self, name: &str) -> Company {
        self.companies
            .create(Company::new(name.to_string()))
            .await
            .unwrap()
    }

    pub async fn member(&self, company: &Company, email: &str, role: Role) -> User {
        let hash = self.hasher.hash(PASSWORD).unwrap();
        self.users
            .create(User::new(
                company.id,
                format!("Member {email}"),
                email.to_string(),
                hash,
                role,
            ))
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.tokens.encode(&CurrentUser::from(user)).unwrap()
    }

    pub fn bearer(&self, user: &User) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token_for(user)))
    }
}
