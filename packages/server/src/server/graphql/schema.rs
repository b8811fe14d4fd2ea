//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, RootNode};
use tracing::info;

use crate::domains::projects::activities as project_activities;
use crate::domains::projects::data::{
    ProjectData, ProjectStatsData, SubmitProjectInput, SubmitProjectResult,
};
use crate::domains::projects::errors::ProjectError;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Public
    // =========================================================================

    /// Approved projects, newest first. `category` narrows the list.
    async fn active_projects(
        ctx: &GraphQLContext,
        category: Option<String>,
    ) -> Result<Vec<ProjectData>, ProjectError> {
        let projects =
            project_activities::list_active_projects(category.as_deref(), &ctx.deps).await?;
        Ok(projects.into_iter().map(ProjectData::from).collect())
    }

    /// A single project. Unpublished projects are only visible to their
    /// creator and to admins.
    async fn project(ctx: &GraphQLContext, id: String) -> Result<ProjectData, ProjectError> {
        let project = project_activities::get_project(&id, &ctx.session, &ctx.deps).await?;
        Ok(ProjectData::from(project))
    }

    // =========================================================================
    // Authenticated
    // =========================================================================

    /// The caller's own submissions in every status
    async fn my_projects(ctx: &GraphQLContext) -> Result<Vec<ProjectData>, ProjectError> {
        let projects = project_activities::list_my_projects(&ctx.session, &ctx.deps).await?;
        Ok(projects.into_iter().map(ProjectData::from).collect())
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Moderation queue (admin only)
    async fn pending_projects(ctx: &GraphQLContext) -> Result<Vec<ProjectData>, ProjectError> {
        let projects = project_activities::list_pending_projects(&ctx.session, &ctx.deps).await?;
        Ok(projects.into_iter().map(ProjectData::from).collect())
    }

    /// Dashboard counters (admin only)
    async fn project_stats(ctx: &GraphQLContext) -> Result<ProjectStatsData, ProjectError> {
        project_activities::project_stats(&ctx.session, &ctx.deps).await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Submit a project for review (requires login)
    async fn submit_project(
        ctx: &GraphQLContext,
        input: SubmitProjectInput,
    ) -> Result<SubmitProjectResult, ProjectError> {
        info!("submit_project mutation called");

        let project_id = project_activities::submit_project(input, &ctx.session, &ctx.deps).await?;
        Ok(SubmitProjectResult::pending(project_id.to_string()))
    }

    /// Approve a pending project (admin only)
    async fn approve_project(
        ctx: &GraphQLContext,
        project_id: String,
    ) -> Result<ProjectData, ProjectError> {
        info!(project_id = %project_id, "approve_project mutation called");

        let project =
            project_activities::approve_project(&project_id, &ctx.session, &ctx.deps).await?;
        Ok(ProjectData::from(project))
    }

    /// Reject a pending project (admin only). `reason` must not be blank.
    async fn reject_project(
        ctx: &GraphQLContext,
        project_id: String,
        reason: String,
    ) -> Result<ProjectData, ProjectError> {
        info!(project_id = %project_id, "reject_project mutation called");

        let project =
            project_activities::reject_project(&project_id, &reason, &ctx.session, &ctx.deps)
                .await?;
        Ok(ProjectData::from(project))
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
