pub mod company;
pub mod task;
pub mod user;

pub use company::{CompanyRepository, InMemoryCompanyRepository};
pub use task::{InMemoryTaskRepository, TaskRepository};
pub use user::{InMemoryUserRepository, UserRepository};
