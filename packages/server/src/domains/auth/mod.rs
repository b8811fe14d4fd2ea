//! Auth domain - resolves sessions into actors
//!
//! Responsibilities:
//! - Session token issuance and verification (JWT)
//! - Reading role assignments (read-only; roles are granted elsewhere)
//! - Turning a session into an `Actor` for the capability checks
//!
//! Password, OTP and account management belong to the identity provider.

pub mod access;
pub mod jwt;
pub mod models;
pub mod role_store;

pub use access::AccessControl;
pub use jwt::{Claims, JwtService};
pub use models::{AppRole, UserRole};
pub use role_store::PostgresRoleStore;
