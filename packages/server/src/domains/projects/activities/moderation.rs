//! Moderation activities (admin only)
//!
//! `pending -> active` and `pending -> rejected` are the only transitions.
//! Both go through the store's compare-and-set, so when two admins act on
//! the same project at once the second sees `InvalidTransition`.

use tracing::{info, warn};

use crate::common::{Capability, ProjectId, Session};
use crate::domains::projects::errors::ProjectError;
use crate::domains::projects::models::{Project, ProjectFilter, ProjectStatus};
use crate::kernel::ServerDeps;

use super::parse_project_id;

/// Approve a pending project, publishing it.
/// Returns the updated project; no field other than `status` changes.
pub async fn approve_project(
    project_id: &str,
    session: &Session,
    deps: &ServerDeps,
) -> Result<Project, ProjectError> {
    let actor = deps.resolve_actor(session).await?;
    let admin_id = actor.can(Capability::ModerateProjects).check()?;
    let id = parse_project_id(project_id)?;

    info!(project_id = %id, admin_id = %admin_id, "Approving project");

    let project = transition(id, ProjectStatus::Active, None, deps).await?;

    info!(project_id = %id, "Project approved");
    Ok(project)
}

/// Reject a pending project with a reason shown to its creator.
///
/// A blank reason fails with `MissingReason` before the store is read, so
/// the answer does not depend on the project's current state.
pub async fn reject_project(
    project_id: &str,
    reason: &str,
    session: &Session,
    deps: &ServerDeps,
) -> Result<Project, ProjectError> {
    let actor = deps.resolve_actor(session).await?;
    let admin_id = actor.can(Capability::ModerateProjects).check()?;

    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ProjectError::MissingReason);
    }

    let id = parse_project_id(project_id)?;

    info!(project_id = %id, admin_id = %admin_id, reason = %reason, "Rejecting project");

    let project = transition(id, ProjectStatus::Rejected, Some(reason.to_string()), deps).await?;

    info!(project_id = %id, "Project rejected");
    Ok(project)
}

/// The moderation queue: every pending project, newest submission first
pub async fn list_pending_projects(
    session: &Session,
    deps: &ServerDeps,
) -> Result<Vec<Project>, ProjectError> {
    let actor = deps.resolve_actor(session).await?;
    actor.can(Capability::ModerateProjects).check()?;

    let projects = deps
        .project_store
        .list(ProjectFilter::status(ProjectStatus::Pending))
        .await?;

    Ok(projects)
}

async fn transition(
    id: ProjectId,
    next: ProjectStatus,
    rejection_reason: Option<String>,
    deps: &ServerDeps,
) -> Result<Project, ProjectError> {
    // Races are settled by the compare-and-set, not by this read
    let current = deps.project_store.get(id).await?;
    if !current.status.can_transition_to(next) {
        warn!(project_id = %id, current = %current.status, next = %next, "Invalid status transition");
        return Err(ProjectError::InvalidTransition {
            id,
            current: current.status,
        });
    }

    deps.project_store
        .update_status(id, ProjectStatus::Pending, next, rejection_reason)
        .await
        .map_err(|e| {
            warn!(project_id = %id, error = %e, "Status transition failed");
            ProjectError::from(e)
        })
}
