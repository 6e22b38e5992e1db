//! Identity of the authenticated caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Role, User};

/// Claims carried inside an access token and attached to the request once
/// the token verifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User id
    pub id: Uuid,
    /// Company the user belongs to
    pub company_id: Uuid,
    /// Full name at the time the token was issued
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The token payload and the authenticated caller are the same record
pub type TokenPayload = CurrentUser;

impl CurrentUser {
    /// Whether the caller may act on data of `company_id`
    pub fn belongs_to(&self, company_id: Uuid) -> bool {
        self.company_id == company_id
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            company_id: user.company_id,
            name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}
