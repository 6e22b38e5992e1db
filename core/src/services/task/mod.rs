//! Task management use cases, scoped to one company.

mod service;


pub use service::{NewTask, TaskService, TaskUpdate};
