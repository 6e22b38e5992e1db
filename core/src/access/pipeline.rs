use std::sync::Arc;

use crate::errors::{catalog, DomainException, DomainResult};
use crate::services::token::TokenService;

use super::context::RequestContext;
use super::route::RouteAccess;

/// Extract the token from an `Authorization` value of the exact form
/// `Bearer <token>`, where the token is printable ASCII.
pub fn parse_bearer(authorization: &str) -> Option<&str> {
    let mut parts = authorization.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None)
            if !token.is_empty() && token.chars().all(|c| c.is_ascii_graphic()) =>
        {
            Some(token)
        }
        _ => None,
    }
}

/// Gate evaluated before every route handler
///
/// Steps run in order and the first failure is returned:
/// public bypass, bearer authentication, role check, policy check.
#[derive(Clone)]
pub struct AuthorizationPipeline {
    token_service: Arc<dyn TokenService>,
}

impl AuthorizationPipeline {
    pub fn new(token_service: Arc<dyn TokenService>) -> Self {
        Self { token_service }
    }

    /// Authorize one request
    ///
    /// On success for a protected route the verified caller is stored in
    /// `ctx`. Public routes leave `ctx` untouched.
    ///
    /// # Errors
    ///
    /// * `AUTHENTICATION_REQUIRED` - no `Authorization` header
    /// * `INVALID_CREDENTIALS_FORMAT` - header is not `Bearer <token>`
    /// * `TOKEN_INVALID` - the token does not verify
    /// * `ACCESS_DENIED` - role not allowed or a policy rejected the request
    pub fn authorize(&self, route: &RouteAccess, ctx: &mut RequestContext) -> DomainResult<()> {
        if route.is_public() {
            return Ok(());
        }

        self.authenticate(ctx)?;
        Self::check_role(route, ctx)?;
        Self::check_policies(route, ctx)
    }

    fn authenticate(&self, ctx: &mut RequestContext) -> DomainResult<()> {
        let authorization = ctx
            .header("authorization")
            .ok_or_else(|| DomainException::new(&catalog::auth::AUTHENTICATION_REQUIRED))?;

        let token = parse_bearer(authorization)
            .ok_or_else(|| DomainException::new(&catalog::auth::INVALID_CREDENTIALS_FORMAT))?;

        let user = self.token_service.verify(token).map_err(|e| {
            tracing::debug!(reason = %e, "Bearer token rejected");
            DomainException::new(&catalog::auth::TOKEN_INVALID)
        })?;

        ctx.set_user(user);
        Ok(())
    }

    fn check_role(route: &RouteAccess, ctx: &RequestContext) -> DomainResult<()> {
        match ctx.user() {
            Some(user) if route.permits_role(user.role) => Ok(()),
            Some(user) => {
                tracing::warn!(
                    user_id = %user.id,
                    role = %user.role,
                    "Role not allowed on route"
                );
                Err(DomainException::new(&catalog::auth::ACCESS_DENIED))
            }
            None => Err(DomainException::new(&catalog::auth::AUTHENTICATION_REQUIRED)),
        }
    }

    fn check_policies(route: &RouteAccess, ctx: &RequestContext) -> DomainResult<()> {
        for policy in route.policies() {
            if !policy.evaluate(ctx) {
                tracing::warn!(
                    policy = policy.name(),
                    user_id = ?ctx.user().map(|u| u.id),
                    "{}",
                    policy.message()
                );
                return Err(DomainException::new(&catalog::auth::ACCESS_DENIED));
            }
        }
        Ok(())
    }
}
