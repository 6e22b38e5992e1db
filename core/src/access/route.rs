use crate::domain::entities::Role;

use super::policy::AccessPolicy;

/// Access declaration attached to one route
///
/// An empty role list admits every authenticated caller. Policies are
/// combined with AND.
#[derive(Debug, Clone, Default)]
pub struct RouteAccess {
    public: bool,
    roles: Vec<Role>,
    policies: Vec<AccessPolicy>,
}

impl RouteAccess {
    /// No authentication at all
    pub fn public() -> Self {
        Self {
            public: true,
            ..Default::default()
        }
    }

    /// Any authenticated caller
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Authenticated callers holding one of `roles`
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Shorthand for every role
    pub fn any_role() -> Self {
        Self::roles(Role::ALL)
    }

    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    pub fn allowed_roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn policies(&self) -> &[AccessPolicy] {
        &self.policies
    }

    /// Whether `role` satisfies the role list
    pub fn permits_role(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}
