use super::{AuthError, Capability};
use crate::common::entity_ids::MemberId;

/// The resolved caller of a service operation.
///
/// Usage:
/// ```
/// # use server_core::common::{Actor, Capability, MemberId};
/// # let actor = Actor::Member(MemberId::new());
/// let creator_id = actor.can(Capability::SubmitProjects).check()?;
/// # Ok::<(), server_core::common::AuthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// No session, or a session that failed verification
    Anonymous,
    /// Logged in without elevated role
    Member(MemberId),
    /// Logged in with the admin role
    Admin(MemberId),
}

impl Actor {
    /// Build an actor from an authenticated member and its role flag
    pub fn authenticated(member_id: MemberId, is_admin: bool) -> Self {
        if is_admin {
            Actor::Admin(member_id)
        } else {
            Actor::Member(member_id)
        }
    }

    pub fn member_id(&self) -> Option<MemberId> {
        match self {
            Actor::Anonymous => None,
            Actor::Member(id) | Actor::Admin(id) => Some(*id),
        }
    }

    /// Returns the member id, or `Unauthenticated` for anonymous callers.
    pub fn require_authenticated(&self) -> Result<MemberId, AuthError> {
        self.member_id().ok_or(AuthError::Unauthenticated)
    }

    /// Returns the admin's member id.
    ///
    /// Anonymous callers get `Unauthenticated`, logged-in members without the
    /// role get `Forbidden`.
    pub fn require_admin(&self) -> Result<MemberId, AuthError> {
        match self {
            Actor::Anonymous => Err(AuthError::Unauthenticated),
            Actor::Member(_) => Err(AuthError::Forbidden),
            Actor::Admin(id) => Ok(*id),
        }
    }

    /// Specify what capability the actor needs
    pub fn can(&self, capability: Capability) -> CapabilityCheck<'_> {
        CapabilityCheck {
            actor: self,
            capability,
        }
    }

    /// Whether this actor may read a project owned by `creator_id` that is not
    /// publicly listed.
    pub fn can_see_unpublished(&self, creator_id: MemberId) -> bool {
        match self {
            Actor::Anonymous => false,
            Actor::Member(id) => *id == creator_id,
            Actor::Admin(_) => true,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityCheck<'a> {
    actor: &'a Actor,
    capability: Capability,
}

impl CapabilityCheck<'_> {
    /// Perform the authorization check, yielding the caller's member id.
    pub fn check(self) -> Result<MemberId, AuthError> {
        if self.capability.requires_admin() {
            self.actor.require_admin()
        } else {
            self.actor.require_authenticated()
        }
    }
}
