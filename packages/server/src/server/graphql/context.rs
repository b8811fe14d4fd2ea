use std::sync::Arc;

use crate::common::Session;
use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Shared dependencies plus the caller's (unverified) session. Resolvers
/// hand the session to activities, which resolve it into an actor.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub session: Session,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, session: Session) -> Self {
        Self { deps, session }
    }
}
