pub mod auth;
pub mod cors;
pub mod error_handler;
pub mod security;

pub use auth::{AuthContext, Authorize};
pub use cors::create_cors;
pub use error_handler::NormalizeErrors;
pub use security::SecurityMiddleware;
