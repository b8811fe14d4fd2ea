use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::MemberId;

/// Roles a member can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "app_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppRole {
    Admin,
    User,
}

/// Role assignment stored alongside the member record.
///
/// Assignments are managed outside this service; here they are only read.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRole {
    pub member_id: MemberId,
    pub role: AppRole,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl UserRole {
    /// Check whether a member holds a role
    pub async fn has_role(member_id: MemberId, role: AppRole, pool: &PgPool) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE member_id = $1 AND role = $2)",
        )
        .bind(member_id)
        .bind(role)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
