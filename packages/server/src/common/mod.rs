// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;

pub use auth::{Actor, AuthError, Capability, Session};
pub use entity_ids::*;
pub use id::Id;
