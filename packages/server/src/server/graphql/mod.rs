// GraphQL schema and context
pub mod context;
mod error;
pub mod schema;

pub use context::*;
pub use schema::*;
