pub mod user_role;

pub use user_role::{AppRole, UserRole};
