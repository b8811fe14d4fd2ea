//! Project submission
//!
//! Anyone logged in may submit. Submissions always land in `pending`.

use chrono::Utc;
use tracing::info;

use crate::common::{Capability, ProjectId, Session};
use crate::domains::projects::data::SubmitProjectInput;
use crate::domains::projects::errors::ProjectError;
use crate::domains::projects::models::Project;
use crate::domains::projects::validation::validate_submission;
use crate::kernel::ServerDeps;

/// Submit a new project for review.
/// Returns the new ProjectId. Nothing is written when validation fails.
pub async fn submit_project(
    input: SubmitProjectInput,
    session: &Session,
    deps: &ServerDeps,
) -> Result<ProjectId, ProjectError> {
    let actor = deps.resolve_actor(session).await?;
    let creator_id = actor.can(Capability::SubmitProjects).check()?;

    let draft = validate_submission(&input, &deps.campaign_domain).map_err(|violations| {
        info!(
            creator_id = %creator_id,
            violations = violations.len(),
            "Project submission failed validation"
        );
        ProjectError::ValidationFailed(violations)
    })?;

    let project = Project::pending(draft, creator_id, Utc::now());
    let project_id = deps.project_store.create(project).await?;

    info!(project_id = %project_id, creator_id = %creator_id, "Project submitted for review");
    // No outbound notification yet; admins find new work in the pending queue
    info!(project_id = %project_id, "Moderators should be notified of new submission");

    Ok(project_id)
}
