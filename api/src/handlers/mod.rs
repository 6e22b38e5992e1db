pub mod error;

pub use error::{ApiError, ErrorEnvelope, ExceptionNormalizer, HttpMessage};
