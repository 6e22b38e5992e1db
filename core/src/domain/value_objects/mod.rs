//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod current_user;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use current_user::{CurrentUser, TokenPayload};
pub use tm_shared::types::{Page, PageRequest};
