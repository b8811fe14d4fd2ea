//! Projects domain - submission, moderation and listing of school campaigns

pub mod activities;
pub mod data;
pub mod errors;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use data::{ProjectData, ProjectStatsData, SubmitProjectInput, SubmitProjectResult};
pub use errors::ProjectError;
pub use models::{Project, ProjectCategory, ProjectFilter, ProjectStatus};
pub use store::PostgresProjectStore;
pub use validation::{FieldViolation, ProjectDraft, ViolationKind};
