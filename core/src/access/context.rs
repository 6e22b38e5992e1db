use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::value_objects::CurrentUser;

/// Everything a policy may inspect about one request
///
/// Header names are stored lowercase. The caller is only present after
/// the token has been verified.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user: Option<CurrentUser>,
    params: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Value,
    headers: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// The authenticated caller, if any
    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub(crate) fn set_user(&mut self, user: CurrentUser) {
        self.user = Some(user);
    }

    /// Route parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Route parameter parsed as a UUID; `None` when absent or malformed
    pub fn param_uuid(&self, name: &str) -> Option<Uuid> {
        self.param(name).and_then(|value| Uuid::parse_str(value).ok())
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}
