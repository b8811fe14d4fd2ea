//! Authorization module
//!
//! Every service entry point resolves its caller to an [`Actor`] and then
//! states the capability it needs:
//!
//! ```rust
//! use server_core::common::{Actor, Capability, MemberId};
//!
//! let actor = Actor::Admin(MemberId::new());
//! let admin_id = actor.can(Capability::ModerateProjects).check()?;
//! # Ok::<(), server_core::common::AuthError>(())
//! ```
//!
//! Resolution of a [`Session`] into an `Actor` lives in
//! `domains::auth::AccessControl`, which owns the token verifier and the
//! role store.

mod builder;
mod capability;
mod errors;
mod session;

pub use builder::{Actor, CapabilityCheck};
pub use capability::Capability;
pub use errors::AuthError;
pub use session::Session;
