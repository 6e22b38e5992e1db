//! Company management use cases.

mod service;

#[cfg(test)]
mod tests;

pub use service::CompanyService;
