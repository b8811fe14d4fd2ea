//! Project read activities

use tracing::debug;

use crate::common::{Capability, Session};
use crate::domains::projects::data::ProjectStatsData;
use crate::domains::projects::errors::ProjectError;
use crate::domains::projects::models::{Project, ProjectFilter, ProjectStatus};
use crate::domains::projects::validation::parse_category;
use crate::kernel::ServerDeps;

use super::parse_project_id;

/// Public listing: active projects only, optionally narrowed to one category
pub async fn list_active_projects(
    category: Option<&str>,
    deps: &ServerDeps,
) -> Result<Vec<Project>, ProjectError> {
    let category = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(raw) => Some(parse_category(raw).map_err(|v| ProjectError::ValidationFailed(vec![v]))?),
        None => None,
    };

    let filter = ProjectFilter::status(ProjectStatus::Active).with_category(category);
    Ok(deps.project_store.list(filter).await?)
}

/// Fetch one project.
///
/// Active projects are public. Pending and rejected ones are only visible
/// to their creator and to admins; everyone else gets `NotFound`.
pub async fn get_project(
    project_id: &str,
    session: &Session,
    deps: &ServerDeps,
) -> Result<Project, ProjectError> {
    let id = parse_project_id(project_id)?;
    let project = deps.project_store.get(id).await?;

    if project.is_published() {
        return Ok(project);
    }

    let actor = deps.resolve_actor(session).await?;
    if actor.can_see_unpublished(project.creator_id) {
        Ok(project)
    } else {
        debug!(project_id = %id, status = %project.status, "Hiding unpublished project");
        Err(ProjectError::NotFound(project_id.to_string()))
    }
}

/// The caller's own submissions in every status, newest first
pub async fn list_my_projects(
    session: &Session,
    deps: &ServerDeps,
) -> Result<Vec<Project>, ProjectError> {
    let actor = deps.resolve_actor(session).await?;
    let member_id = actor.can(Capability::ViewOwnProjects).check()?;

    Ok(deps
        .project_store
        .list(ProjectFilter::creator(member_id))
        .await?)
}

/// Dashboard counters (admin only)
pub async fn project_stats(
    session: &Session,
    deps: &ServerDeps,
) -> Result<ProjectStatsData, ProjectError> {
    let actor = deps.resolve_actor(session).await?;
    actor.can(Capability::ModerateProjects).check()?;

    let counts = deps.project_store.count_by_status().await?;
    Ok(ProjectStatsData::from_counts(&counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::projects::activities::test_support::{reading_corner_input, Fixture};
    use crate::domains::projects::activities::{approve_project, reject_project, submit_project};
    use crate::domains::projects::models::ProjectCategory;

    async fn submit(fx: &Fixture, category: &str) -> String {
        let mut input = reading_corner_input();
        input.category = category.to_string();
        submit_project(input, &fx.member, &fx.deps)
            .await
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_active_listing_hides_unpublished() {
        let fx = Fixture::new();
        let pending = submit(&fx, "education").await;
        let active = submit(&fx, "education").await;
        let rejected = submit(&fx, "education").await;
        approve_project(&active, &fx.admin, &fx.deps).await.unwrap();
        reject_project(&rejected, "off-topic", &fx.admin, &fx.deps)
            .await
            .unwrap();

        let listed = list_active_projects(None, &fx.deps).await.unwrap();
        let ids: Vec<String> = listed.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec![active]);
        assert!(!ids.contains(&pending));
    }

    #[tokio::test]
    async fn test_active_listing_by_category() {
        let fx = Fixture::new();
        let school = submit(&fx, "education").await;
        let clinic = submit(&fx, "healthcare").await;
        approve_project(&school, &fx.admin, &fx.deps).await.unwrap();
        approve_project(&clinic, &fx.admin, &fx.deps).await.unwrap();

        let listed = list_active_projects(Some("healthcare"), &fx.deps)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category, ProjectCategory::Healthcare);

        // Blank filter means no filter
        assert_eq!(list_active_projects(Some(" "), &fx.deps).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_category_filter_is_a_violation() {
        let fx = Fixture::new();
        let err = list_active_projects(Some("sports"), &fx.deps)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_FAILED");
        assert_eq!(err.violations()[0].field, "category");
    }

    #[tokio::test]
    async fn test_pending_project_visibility() {
        let fx = Fixture::new();
        let id = submit(&fx, "education").await;

        assert!(get_project(&id, &fx.member, &fx.deps).await.is_ok());
        assert!(get_project(&id, &fx.admin, &fx.deps).await.is_ok());

        let stranger = get_project(&id, &fx.other_member(), &fx.deps).await;
        assert!(matches!(stranger, Err(ProjectError::NotFound(_))));

        let anonymous = get_project(&id, &Session::anonymous(), &fx.deps).await;
        assert!(matches!(anonymous, Err(ProjectError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_active_project_is_public() {
        let fx = Fixture::new();
        let id = submit(&fx, "community").await;
        approve_project(&id, &fx.admin, &fx.deps).await.unwrap();

        let project = get_project(&id, &Session::anonymous(), &fx.deps)
            .await
            .unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
    }

    #[tokio::test]
    async fn test_my_projects_include_rejection_reason() {
        let fx = Fixture::new();
        let id = submit(&fx, "technology").await;
        reject_project(&id, "Campaign closed", &fx.admin, &fx.deps)
            .await
            .unwrap();

        // Someone else's submission stays out of the list
        submit_project(reading_corner_input(), &fx.other_member(), &fx.deps)
            .await
            .unwrap();

        let mine = list_my_projects(&fx.member, &fx.deps).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].rejection_reason.as_deref(), Some("Campaign closed"));

        let anonymous = list_my_projects(&Session::anonymous(), &fx.deps).await;
        assert!(matches!(anonymous, Err(ProjectError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_stats_count_each_status() {
        let fx = Fixture::new();
        let a = submit(&fx, "education").await;
        let b = submit(&fx, "education").await;
        submit(&fx, "education").await;
        approve_project(&a, &fx.admin, &fx.deps).await.unwrap();
        reject_project(&b, "dup", &fx.admin, &fx.deps).await.unwrap();

        let stats = project_stats(&fx.admin, &fx.deps).await.unwrap();
        assert_eq!(
            stats,
            ProjectStatsData {
                pending: 1,
                active: 1,
                rejected: 1,
            }
        );

        let member = project_stats(&fx.member, &fx.deps).await;
        assert!(matches!(member, Err(ProjectError::Forbidden)));
    }
}
