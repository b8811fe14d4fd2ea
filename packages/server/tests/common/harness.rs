//! Test harness for integration testing.
//!
//! Wires the real schema and activities to the in-memory project and role
//! stores, so the full GraphQL path runs without a database.

use std::sync::Arc;

use server_core::common::{MemberId, Session};
use server_core::kernel::{ServerDeps, TestDependencies};

use super::GraphQLClient;

/// Shared fixtures for one test: a regular member and an admin.
pub struct TestHarness {
    pub test_deps: TestDependencies,
    pub deps: Arc<ServerDeps>,
    pub member_id: MemberId,
    pub admin_id: MemberId,
}

impl TestHarness {
    pub fn new() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let test_deps = TestDependencies::new();
        let member_id = MemberId::new();
        let admin_id = MemberId::new();
        test_deps.roles.grant_admin(admin_id);

        Self {
            deps: Arc::new(test_deps.clone().into_server_deps()),
            test_deps,
            member_id,
            admin_id,
        }
    }

    /// A valid session for any member id
    pub fn session_for(&self, member_id: MemberId) -> Session {
        Session::bearer(self.test_deps.token_for(member_id))
    }

    pub fn client(&self, session: Session) -> GraphQLClient {
        GraphQLClient::new(self.deps.clone(), session)
    }

    pub fn anonymous(&self) -> GraphQLClient {
        self.client(Session::anonymous())
    }

    pub fn member(&self) -> GraphQLClient {
        self.client(self.session_for(self.member_id))
    }

    pub fn admin(&self) -> GraphQLClient {
        self.client(self.session_for(self.admin_id))
    }

    /// Another logged-in member without the admin role
    pub fn stranger(&self) -> GraphQLClient {
        self.client(self.session_for(MemberId::new()))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
