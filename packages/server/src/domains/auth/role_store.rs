//! Postgres-backed role lookups.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::MemberId;
use crate::domains::auth::models::{AppRole, UserRole};
use crate::kernel::BaseRoleStore;

/// Reads admin assignments from the `user_roles` table.
#[derive(Clone)]
pub struct PostgresRoleStore {
    pool: PgPool,
}

impl PostgresRoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseRoleStore for PostgresRoleStore {
    async fn is_admin(&self, member_id: MemberId) -> Result<bool> {
        UserRole::has_role(member_id, AppRole::Admin, &self.pool).await
    }
}
