//! The exception type business logic raises.

use thiserror::Error;

use super::catalog::ErrorDescriptor;

/// A catalog error raised at a specific point, optionally with a more
/// specific message than the descriptor default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", effective(.descriptor, .custom_message))]
pub struct DomainException {
    descriptor: &'static ErrorDescriptor,
    custom_message: Option<String>,
}

impl DomainException {
    /// Raise the descriptor with its default message
    pub fn new(descriptor: &'static ErrorDescriptor) -> Self {
        Self {
            descriptor,
            custom_message: None,
        }
    }

    /// Override the message shown to the client
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// The catalog entry behind this exception
    pub fn descriptor(&self) -> &'static ErrorDescriptor {
        self.descriptor
    }

    /// Custom message if set, otherwise the descriptor default
    pub fn effective_message(&self) -> &str {
        effective(self.descriptor, &self.custom_message)
    }

    pub fn code(&self) -> u16 {
        self.descriptor.code
    }

    pub fn http_status(&self) -> u16 {
        self.descriptor.http_status
    }

    pub fn identifier(&self) -> &'static str {
        self.descriptor.identifier
    }

    /// Whether this exception was raised from `descriptor`
    pub fn is(&self, descriptor: &ErrorDescriptor) -> bool {
        self.descriptor.code == descriptor.code
    }
}

impl From<&'static ErrorDescriptor> for DomainException {
    fn from(descriptor: &'static ErrorDescriptor) -> Self {
        Self::new(descriptor)
    }
}

fn effective<'a>(descriptor: &'a ErrorDescriptor, custom: &'a Option<String>) -> &'a str {
    custom.as_deref().unwrap_or(descriptor.message)
}
