//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by the project
//! activities. Storage and role lookups sit behind trait objects so tests can
//! swap in the in-memory implementations.

use sqlx::PgPool;
use std::sync::Arc;

use crate::common::{Actor, AuthError, Session};
use crate::domains::auth::{AccessControl, JwtService, PostgresRoleStore};
use crate::domains::projects::PostgresProjectStore;
use crate::kernel::{BaseProjectStore, BaseRoleStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub project_store: Arc<dyn BaseProjectStore>,
    /// Session resolution (JWT verification plus role lookup)
    pub access: AccessControl,
    /// Host fragment every campaign link must contain, lowercased
    pub campaign_domain: String,
}

impl ServerDeps {
    pub fn new(
        project_store: Arc<dyn BaseProjectStore>,
        roles: Arc<dyn BaseRoleStore>,
        jwt_service: Arc<JwtService>,
        campaign_domain: impl Into<String>,
    ) -> Self {
        Self {
            project_store,
            access: AccessControl::new(jwt_service, roles),
            campaign_domain: campaign_domain.into().to_lowercase(),
        }
    }

    /// Production wiring: both stores read and write the same Postgres pool
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        campaign_domain: impl Into<String>,
    ) -> Self {
        Self::new(
            Arc::new(PostgresProjectStore::new(pool.clone())),
            Arc::new(PostgresRoleStore::new(pool)),
            jwt_service,
            campaign_domain,
        )
    }

    pub async fn resolve_actor(&self, session: &Session) -> Result<Actor, AuthError> {
        self.access.resolve(session).await
    }
}
