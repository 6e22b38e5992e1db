use std::fmt;

use crate::domain::entities::Role;

use super::context::RequestContext;

/// Route parameter holding the target company
pub const COMPANY_ID_PARAM: &str = "company_id";

/// Route parameter holding the target record
pub const ID_PARAM: &str = "id";

/// A named predicate over the request context
///
/// The message is for operators; callers only ever see the generic
/// `ACCESS_DENIED` description.
#[derive(Clone, Copy)]
pub struct AccessPolicy {
    name: &'static str,
    message: &'static str,
    predicate: fn(&RequestContext) -> bool,
}

impl AccessPolicy {
    pub fn new(
        name: &'static str,
        message: &'static str,
        predicate: fn(&RequestContext) -> bool,
    ) -> Self {
        Self {
            name,
            message,
            predicate,
        }
    }

    /// Non-`USER` callers pass. A `USER` passes only when the route targets
    /// their own record inside their own company.
    pub fn self_access() -> Self {
        Self::new(
            "self-access",
            "You can only access or modify your own data.",
            is_accessing_own_data,
        )
    }

    /// Only an `ADMIN` acting inside their own company passes.
    pub fn admin_scope() -> Self {
        Self::new(
            "admin-scope",
            "You can only access or modify your own data if you are from your company.",
            is_admin_of_target_company,
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn evaluate(&self, ctx: &RequestContext) -> bool {
        (self.predicate)(ctx)
    }
}

impl fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

fn is_accessing_own_data(ctx: &RequestContext) -> bool {
    let Some(user) = ctx.user() else {
        return false;
    };
    if user.role != Role::User {
        return true;
    }

    ctx.param_uuid(ID_PARAM) == Some(user.id)
        && ctx.param_uuid(COMPANY_ID_PARAM) == Some(user.company_id)
}

fn is_admin_of_target_company(ctx: &RequestContext) -> bool {
    match ctx.user() {
        Some(user) => {
            user.role == Role::Admin && ctx.param_uuid(COMPANY_ID_PARAM) == Some(user.company_id)
        }
        None => false,
    }
}
