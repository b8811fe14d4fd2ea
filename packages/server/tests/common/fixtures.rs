//! Test fixtures for creating test data.
//!
//! Submissions go through the GraphQL mutation; seeded projects are written
//! straight into the in-memory store.

use chrono::{Duration, Utc};
use juniper::Variables;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use server_core::common::{MemberId, ProjectId};
use server_core::domains::projects::models::{Project, ProjectCategory, ProjectStatus};
use server_core::domains::projects::validation::ProjectDraft;

use super::{GraphQLClient, TestHarness};

pub const SUBMIT_PROJECT: &str = r#"
    mutation SubmitProject($input: SubmitProjectInput!) {
        submitProject(input: $input) {
            projectId
            status
            message
        }
    }
"#;

pub const APPROVE_PROJECT: &str = r#"
    mutation ApproveProject($projectId: String!) {
        approveProject(projectId: $projectId) {
            id
            status
            rejectionReason
        }
    }
"#;

pub const REJECT_PROJECT: &str = r#"
    mutation RejectProject($projectId: String!, $reason: String!) {
        rejectProject(projectId: $projectId, reason: $reason) {
            id
            status
            rejectionReason
        }
    }
"#;

pub const PENDING_PROJECTS: &str = r#"
    query {
        pendingProjects {
            id
            title
            status
        }
    }
"#;

/// The "Books for Our Reading Corner" payload
pub fn reading_corner() -> Value {
    json!({
        "title": "Books for Our Reading Corner",
        "description": "We want to fill our library corner with new books for every grade.",
        "campaignLink": "https://www.gofundme.com/f/x",
        "category": "education",
        "goalAmount": "500",
        "contactName": "Jo Lee",
        "contactEmail": "jo@x.edu"
    })
}

/// Wrap a submission payload as `$input`
pub fn input_vars(input: Value) -> Variables {
    serde_json::from_value(json!({ "input": input })).expect("valid GraphQL variables")
}

/// Submit the reading-corner payload and return the new project id
pub async fn submit_reading_corner(client: &GraphQLClient) -> String {
    let result = client
        .execute_with_vars(SUBMIT_PROJECT, input_vars(reading_corner()))
        .await;
    result
        .get("submitProject.projectId")
        .as_str()
        .expect("projectId in response")
        .to_string()
}

fn draft(title: &str, category: ProjectCategory) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "A long enough description of what the money will be used for.".to_string(),
        campaign_link: "https://www.gofundme.com/f/seeded".to_string(),
        image_url: None,
        category,
        goal_amount: Decimal::from(1500),
        contact_name: "Sam Rivera".to_string(),
        contact_email: "sam@school.org".to_string(),
        contact_phone: None,
    }
}

/// Write a project in the given status directly into the store.
///
/// `minutes_ago` sets `submitted_at`, for ordering tests.
pub async fn seed_project(
    harness: &TestHarness,
    creator_id: MemberId,
    title: &str,
    category: ProjectCategory,
    status: ProjectStatus,
    minutes_ago: i64,
) -> ProjectId {
    let submitted_at = Utc::now() - Duration::minutes(minutes_ago);
    let project = Project::pending(draft(title, category), creator_id, submitted_at);
    let id = harness
        .deps
        .project_store
        .create(project)
        .await
        .expect("seed project");

    if status != ProjectStatus::Pending {
        let reason = (status == ProjectStatus::Rejected).then(|| "Seeded rejection".to_string());
        harness
            .deps
            .project_store
            .update_status(id, ProjectStatus::Pending, status, reason)
            .await
            .expect("seed project status");
    }

    id
}
