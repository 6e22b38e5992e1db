//! Company entity, the tenant that owns users and tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant of the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company
    pub id: Uuid,

    /// Display name, unique across the platform
    pub name: String,

    /// Timestamp when the company was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the company was last updated
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Creates a new Company instance
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Renames the company
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}
