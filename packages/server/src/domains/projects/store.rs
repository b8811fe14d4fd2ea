//! Postgres-backed project storage.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::common::ProjectId;
use crate::domains::projects::models::{Project, ProjectFilter, ProjectStatus};
use crate::kernel::{BaseProjectStore, StoreError};

#[derive(Clone)]
pub struct PostgresProjectStore {
    pool: PgPool,
}

impl PostgresProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseProjectStore for PostgresProjectStore {
    async fn create(&self, project: Project) -> Result<ProjectId, StoreError> {
        let inserted = project.insert(&self.pool).await?;
        Ok(inserted.id)
    }

    async fn get(&self, id: ProjectId) -> Result<Project, StoreError> {
        Project::find_by_id_optional(id, &self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: ProjectId,
        expected: ProjectStatus,
        next: ProjectStatus,
        rejection_reason: Option<String>,
    ) -> Result<Project, StoreError> {
        if let Some(updated) = Project::transition_status(
            id,
            expected,
            next,
            rejection_reason.as_deref(),
            &self.pool,
        )
        .await?
        {
            return Ok(updated);
        }

        // Lost the compare-and-set; read back to tell "gone" from "moved on"
        let current = Project::find_by_id_optional(id, &self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        debug!(
            project_id = %id,
            expected = %expected,
            actual = %current.status,
            "Status transition lost compare-and-set"
        );

        Err(StoreError::StatusMismatch {
            id,
            expected,
            actual: current.status,
        })
    }

    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, StoreError> {
        Ok(Project::find_filtered(&filter, &self.pool).await?)
    }

    async fn count_by_status(&self) -> Result<Vec<(ProjectStatus, i64)>, StoreError> {
        Ok(Project::count_by_status(&self.pool).await?)
    }
}
