//! Type definitions shared by list endpoints

pub mod pagination;

pub use pagination::{Page, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
