use thiserror::Error;

use crate::common::{AuthError, ProjectId};
use crate::domains::projects::models::ProjectStatus;
use crate::domains::projects::validation::FieldViolation;
use crate::kernel::StoreError;

/// Errors reported by the project submission and moderation operations.
///
/// Every variant is scoped to the failing operation; none are retried here.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Unauthenticated: valid session required")]
    Unauthenticated,

    #[error("Forbidden: admin access required")]
    Forbidden,

    #[error("Validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<FieldViolation>),

    #[error("Invalid transition: project {id} is already {current}")]
    InvalidTransition {
        id: ProjectId,
        current: ProjectStatus,
    },

    #[error("A rejection reason is required")]
    MissingReason,

    /// Also used for projects the caller may not see, and for ids that
    /// do not parse.
    #[error("Project {0} not found")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl ProjectError {
    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            ProjectError::Unauthenticated => "UNAUTHENTICATED",
            ProjectError::Forbidden => "FORBIDDEN",
            ProjectError::ValidationFailed(_) => "VALIDATION_FAILED",
            ProjectError::InvalidTransition { .. } => "INVALID_TRANSITION",
            ProjectError::MissingReason => "MISSING_REASON",
            ProjectError::NotFound(_) => "NOT_FOUND",
            ProjectError::Internal(_) => "INTERNAL",
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ProjectError::ValidationFailed(violations) => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<AuthError> for ProjectError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => ProjectError::Unauthenticated,
            AuthError::Forbidden => ProjectError::Forbidden,
            AuthError::RoleLookup(e) => ProjectError::Internal(e),
        }
    }
}

impl From<StoreError> for ProjectError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ProjectError::NotFound(id.to_string()),
            StoreError::StatusMismatch { id, actual, .. } => ProjectError::InvalidTransition {
                id,
                current: actual,
            },
            StoreError::Database(e) => ProjectError::Internal(e.into()),
        }
    }
}
