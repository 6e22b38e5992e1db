//! Domain entities representing core business objects.

pub mod company;
pub mod role;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use company::Company;
pub use role::Role;
pub use task::{Task, TaskStatus};
pub use user::User;
