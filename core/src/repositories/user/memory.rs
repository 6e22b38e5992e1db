//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::{Page, PageRequest};
use crate::errors::{catalog, DomainException, DomainResult};

use super::trait_::UserRepository;

/// User repository backed by a process-local map
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, company_id: Uuid, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .get(&id)
            .filter(|u| u.company_id == company_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list_by_company(
        &self,
        company_id: Uuid,
        page: &PageRequest,
    ) -> DomainResult<Page<User>> {
        let users = self.users.read().await;
        let mut members: Vec<User> = users
            .values()
            .filter(|u| u.company_id == company_id)
            .cloned()
            .collect();
        members.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = members.len() as u64;
        let data = members
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(data, total, page))
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainException::new(&catalog::user::EMAIL_ALREADY_IN_USE));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainException::new(&catalog::user::USER_NOT_FOUND));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainException::new(&catalog::user::EMAIL_ALREADY_IN_USE));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, company_id: Uuid, id: Uuid) -> DomainResult<()> {
        let mut users = self.users.write().await;

        match users.get(&id) {
            Some(user) if user.company_id == company_id => {
                users.remove(&id);
                Ok(())
            }
            _ => Err(DomainException::new(&catalog::user::USER_NOT_FOUND)),
        }
    }
}
