//! User entity representing a member of a company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Company the user belongs to
    pub company_id: Uuid,

    /// Full display name
    pub full_name: String,

    /// Login email, unique across the platform
    pub email: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role granted to the user
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        company_id: Uuid,
        full_name: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_id,
            full_name,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Checks if the user administers a company
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
