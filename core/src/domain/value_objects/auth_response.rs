//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Company the authenticated user belongs to
    pub company_id: Uuid,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(access_token: String, company_id: Uuid) -> Self {
        Self {
            access_token,
            company_id,
        }
    }
}
