use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::domains::projects::models::{Project, ProjectCategory, ProjectStatus};

/// Notice returned with every accepted submission
pub const PENDING_REVIEW_MESSAGE: &str =
    "Your project has been submitted and is pending review by our team.";

// =============================================================================
// Enums
// =============================================================================

/// Moderation status exposed over GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ProjectStatusData {
    /// Waiting for an admin decision
    Pending,
    /// Approved and listed publicly
    Active,
    /// Declined by an admin
    Rejected,
}

impl From<ProjectStatus> for ProjectStatusData {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Pending => Self::Pending,
            ProjectStatus::Active => Self::Active,
            ProjectStatus::Rejected => Self::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ProjectCategoryData {
    Education,
    Healthcare,
    Technology,
    Community,
    Other,
}

impl From<ProjectCategory> for ProjectCategoryData {
    fn from(category: ProjectCategory) -> Self {
        match category {
            ProjectCategory::Education => Self::Education,
            ProjectCategory::Healthcare => Self::Healthcare,
            ProjectCategory::Technology => Self::Technology,
            ProjectCategory::Community => Self::Community,
            ProjectCategory::Other => Self::Other,
        }
    }
}

// =============================================================================
// Project
// =============================================================================

/// Project GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A school fundraising campaign")]
pub struct ProjectData {
    pub id: String,

    // Campaign
    pub title: String,
    pub description: String,
    pub campaign_link: String,
    pub image_url: Option<String>,
    pub category: ProjectCategoryData,

    // Funding
    pub goal_amount: f64,
    /// Always 0; donations are tracked on the campaign site
    pub current_amount: f64,

    // Contact
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,

    // Approval workflow
    pub creator_id: String,
    pub status: ProjectStatusData,
    /// Present only on rejected projects
    pub rejection_reason: Option<String>,

    pub submitted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectData {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            description: project.description,
            campaign_link: project.campaign_link,
            image_url: project.image_url,
            category: project.category.into(),
            goal_amount: project.goal_amount.to_f64().unwrap_or_default(),
            current_amount: project.current_amount.to_f64().unwrap_or_default(),
            contact_name: project.contact_name,
            contact_email: project.contact_email,
            contact_phone: project.contact_phone,
            creator_id: project.creator_id.to_string(),
            status: project.status.into(),
            rejection_reason: project.rejection_reason,
            submitted_at: project.submitted_at,
            created_at: project.created_at,
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Raw submission payload.
///
/// Everything arrives as text so malformed values reach validation and come
/// back as field violations instead of GraphQL coercion errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, GraphQLInputObject)]
pub struct SubmitProjectInput {
    pub title: String,
    pub description: String,
    pub campaign_link: String,
    pub image_url: Option<String>,
    /// One of: education, healthcare, technology, community, other
    pub category: String,
    /// Decimal number between 1 and 1,000,000
    pub goal_amount: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

/// Result of submitting a project
#[derive(Debug, Clone, GraphQLObject)]
pub struct SubmitProjectResult {
    pub project_id: String,
    pub status: ProjectStatusData,
    pub message: String,
}

impl SubmitProjectResult {
    pub fn pending(project_id: String) -> Self {
        Self {
            project_id,
            status: ProjectStatusData::Pending,
            message: PENDING_REVIEW_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Admin dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, GraphQLObject)]
pub struct ProjectStatsData {
    pub pending: i32,
    pub active: i32,
    pub rejected: i32,
}

impl ProjectStatsData {
    pub fn from_counts(counts: &[(ProjectStatus, i64)]) -> Self {
        let mut stats = Self::default();
        for (status, count) in counts {
            let count = i32::try_from(*count).unwrap_or(i32::MAX);
            match status {
                ProjectStatus::Pending => stats.pending = stats.pending.saturating_add(count),
                ProjectStatus::Active => stats.active = stats.active.saturating_add(count),
                ProjectStatus::Rejected => stats.rejected = stats.rejected.saturating_add(count),
            }
        }
        stats
    }
}
