//! User management use cases, scoped to one company.

mod service;


pub use service::{NewUser, UserService, UserUpdate};
