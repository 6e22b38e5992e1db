//! Authentication route handlers
//!
//! - `POST /v1/auth/login`: exchange email and password for an access token
//! - `GET /v1/auth/me`: profile of the authenticated caller

pub mod login;
pub mod me;

pub use login::login;
pub use me::me;
