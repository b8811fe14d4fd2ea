use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{MemberId, ProjectId};
use crate::domains::projects::validation::ProjectDraft;

/// Moderation status of a project.
///
/// `Pending` is the only state a transition may leave; `Active` and
/// `Rejected` are terminal. A rejected campaign has to be submitted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Active,
    Rejected,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Pending,
        ProjectStatus::Active,
        ProjectStatus::Rejected,
    ];

    /// Whether moderation may move a project from `self` to `next`.
    pub fn can_transition_to(self, next: ProjectStatus) -> bool {
        match (self, next) {
            (ProjectStatus::Pending, ProjectStatus::Active) => true,
            (ProjectStatus::Pending, ProjectStatus::Rejected) => true,
            (ProjectStatus::Pending, ProjectStatus::Pending) => false,
            (ProjectStatus::Active, _) | (ProjectStatus::Rejected, _) => false,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Pending => write!(f, "pending"),
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ProjectStatus::Pending),
            "active" => Ok(ProjectStatus::Active),
            "rejected" => Ok(ProjectStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid project status: {}", s)),
        }
    }
}

/// What a project raises money for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Education,
    Healthcare,
    Technology,
    Community,
    Other,
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectCategory::Education => write!(f, "education"),
            ProjectCategory::Healthcare => write!(f, "healthcare"),
            ProjectCategory::Technology => write!(f, "technology"),
            ProjectCategory::Community => write!(f, "community"),
            ProjectCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "education" => Ok(ProjectCategory::Education),
            "healthcare" => Ok(ProjectCategory::Healthcare),
            "technology" => Ok(ProjectCategory::Technology),
            "community" => Ok(ProjectCategory::Community),
            "other" => Ok(ProjectCategory::Other),
            _ => Err(anyhow::anyhow!("Invalid project category: {}", s)),
        }
    }
}

/// Project model - a school fundraising campaign submitted for listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: ProjectId,

    // Campaign
    pub title: String,
    pub description: String,
    pub campaign_link: String,
    pub image_url: Option<String>,
    pub category: ProjectCategory,

    // Funding (tracked off-platform, current_amount is never written here)
    pub goal_amount: Decimal,
    pub current_amount: Decimal,

    // Contact
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,

    // Approval workflow
    pub creator_id: MemberId,
    pub status: ProjectStatus,
    pub rejection_reason: Option<String>,

    // Timestamps
    pub submitted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Filter for listing projects. Every field left `None` matches all rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub creator_id: Option<MemberId>,
    pub category: Option<ProjectCategory>,
}

impl ProjectFilter {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn creator(creator_id: MemberId) -> Self {
        Self {
            creator_id: Some(creator_id),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Option<ProjectCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status.map_or(true, |s| project.status == s)
            && self.creator_id.map_or(true, |c| project.creator_id == c)
            && self.category.map_or(true, |c| project.category == c)
    }
}

impl Project {
    /// Build a freshly submitted project from a validated draft.
    pub fn pending(draft: ProjectDraft, creator_id: MemberId, now: DateTime<Utc>) -> Self {
        Self {
            id: ProjectId::new(),
            title: draft.title,
            description: draft.description,
            campaign_link: draft.campaign_link,
            image_url: draft.image_url,
            category: draft.category,
            goal_amount: draft.goal_amount,
            current_amount: Decimal::ZERO,
            contact_name: draft.contact_name,
            contact_email: draft.contact_email,
            contact_phone: draft.contact_phone,
            creator_id,
            status: ProjectStatus::Pending,
            rejection_reason: None,
            submitted_at: now,
            created_at: now,
        }
    }

    /// Listed on the public site
    pub fn is_published(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Insert a new project row
    pub async fn insert(&self, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO projects (
                id, title, description, campaign_link, image_url, category,
                goal_amount, current_amount, contact_name, contact_email,
                contact_phone, creator_id, status, rejection_reason,
                submitted_at, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(&self.campaign_link)
        .bind(&self.image_url)
        .bind(self.category)
        .bind(self.goal_amount)
        .bind(self.current_amount)
        .bind(&self.contact_name)
        .bind(&self.contact_email)
        .bind(&self.contact_phone)
        .bind(self.creator_id)
        .bind(self.status)
        .bind(&self.rejection_reason)
        .bind(self.submitted_at)
        .bind(self.created_at)
        .fetch_one(pool)
        .await
    }

    /// Find project by ID, returning None if not found
    pub async fn find_by_id_optional(
        id: ProjectId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Compare-and-set on status.
    ///
    /// Returns `None` when no row has both this id and the expected status.
    pub async fn transition_status(
        id: ProjectId,
        expected: ProjectStatus,
        next: ProjectStatus,
        rejection_reason: Option<&str>,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE projects SET
                status = $3,
                rejection_reason = $4
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected)
        .bind(next)
        .bind(rejection_reason)
        .fetch_optional(pool)
        .await
    }

    /// Find projects matching a filter, most recently submitted first
    pub async fn find_filtered(
        filter: &ProjectFilter,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM projects
            WHERE ($1::project_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR creator_id = $2)
              AND ($3::project_category IS NULL OR category = $3)
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .bind(filter.status)
        .bind(filter.creator_id)
        .bind(filter.category)
        .fetch_all(pool)
        .await
    }

    /// Count projects per status (statuses without rows are omitted)
    pub async fn count_by_status(
        pool: &PgPool,
    ) -> Result<Vec<(ProjectStatus, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (ProjectStatus, i64)>(
            "SELECT status, COUNT(*) FROM projects GROUP BY status",
        )
        .fetch_all(pool)
        .await
    }
}
