// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The submission and moderation rules live in domains/projects/activities and
// only reach storage through these seams.
//
// Naming convention: Base* for trait names (e.g., BaseProjectStore)

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::common::{MemberId, ProjectId};
use crate::domains::projects::models::{Project, ProjectFilter, ProjectStatus};

// =============================================================================
// Project Store Trait (Infrastructure - persisted projects)
// =============================================================================

/// Failures at the project storage boundary
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Project {0} not found")]
    NotFound(ProjectId),

    /// The compare-and-set lost: the row exists but is not in the expected status.
    #[error("Project {id} is {actual}, expected {expected}")]
    StatusMismatch {
        id: ProjectId,
        expected: ProjectStatus,
        actual: ProjectStatus,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait BaseProjectStore: Send + Sync {
    /// Persist a new project (the caller assigns the id)
    async fn create(&self, project: Project) -> Result<ProjectId, StoreError>;

    async fn get(&self, id: ProjectId) -> Result<Project, StoreError>;

    /// Atomically move `id` from `expected` to `next`, setting the rejection
    /// reason in the same write. Exactly one of several concurrent callers
    /// with the same `expected` status can win.
    async fn update_status(
        &self,
        id: ProjectId,
        expected: ProjectStatus,
        next: ProjectStatus,
        rejection_reason: Option<String>,
    ) -> Result<Project, StoreError>;

    /// Projects matching `filter`, most recently submitted first
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, StoreError>;

    /// Number of projects per status; statuses with no projects may be omitted
    async fn count_by_status(&self) -> Result<Vec<(ProjectStatus, i64)>, StoreError>;
}

// =============================================================================
// Role Store Trait (Infrastructure - read-only role assignments)
// =============================================================================

#[async_trait]
pub trait BaseRoleStore: Send + Sync {
    /// Whether the member currently holds the admin role
    async fn is_admin(&self, member_id: MemberId) -> Result<bool>;
}
