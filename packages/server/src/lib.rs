// School Projects - API Core
//
// Backend for the school fundraising project listing: submitters post
// campaigns, admins moderate them, the public browses approved ones.
//
// Domain logic lives in domains/*; shared infrastructure traits in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
