//! Typed ID definitions for domain entities.

pub use super::id::Id;

/// Marker type for Member entities (users known to the identity provider).
pub struct Member;

/// Marker type for Project entities (submitted fundraising campaigns).
pub struct Project;

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Project entities.
pub type ProjectId = Id<Project>;
