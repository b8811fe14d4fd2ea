use std::sync::Arc;

use tracing::debug;

use crate::common::{Actor, AuthError, MemberId, Session};
use crate::domains::auth::JwtService;
use crate::kernel::BaseRoleStore;

/// Turns an opaque session into an `Actor`.
///
/// Token verification happens here; the admin flag comes from the role store
/// so a revoked role takes effect on the next request.
#[derive(Clone)]
pub struct AccessControl {
    jwt: Arc<JwtService>,
    roles: Arc<dyn BaseRoleStore>,
}

impl AccessControl {
    pub fn new(jwt: Arc<JwtService>, roles: Arc<dyn BaseRoleStore>) -> Self {
        Self { jwt, roles }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Resolve the caller behind a session.
    ///
    /// Missing, malformed and expired tokens all resolve to `Actor::Anonymous`.
    /// Only a failing role lookup is an error.
    pub async fn resolve(&self, session: &Session) -> Result<Actor, AuthError> {
        let Some(token) = session.token() else {
            return Ok(Actor::Anonymous);
        };

        let claims = match self.jwt.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Session token rejected, treating caller as anonymous");
                return Ok(Actor::Anonymous);
            }
        };

        let member_id = MemberId::from_uuid(claims.member_id);
        let is_admin = self
            .roles
            .is_admin(member_id)
            .await
            .map_err(AuthError::RoleLookup)?;

        debug!(member_id = %member_id, is_admin, "Resolved session");
        Ok(Actor::authenticated(member_id, is_admin))
    }
}
