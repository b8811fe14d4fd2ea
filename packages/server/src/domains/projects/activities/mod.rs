//! Project domain activities - business logic functions
//!
//! Each activity resolves the caller from the session, runs its capability
//! check, then talks to the project store through `ServerDeps`.
//! GraphQL resolvers call activities directly.

mod moderation;
mod queries;
mod submit;

pub use moderation::*;
pub use queries::*;
pub use submit::*;

use crate::common::ProjectId;
use crate::domains::projects::errors::ProjectError;

/// Parse a client-supplied project id; anything unparseable is simply not found
fn parse_project_id(raw: &str) -> Result<ProjectId, ProjectError> {
    ProjectId::parse(raw.trim()).map_err(|_| ProjectError::NotFound(raw.to_string()))
}
