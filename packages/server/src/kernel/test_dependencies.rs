// TestDependencies - in-memory implementations for testing
//
// Provides stores that can be injected into ServerDeps for tests. The project
// store keeps the same compare-and-set contract as the Postgres store so the
// moderation race can be exercised without a database.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{BaseProjectStore, BaseRoleStore, ServerDeps, StoreError};
use crate::common::{MemberId, ProjectId};
use crate::domains::auth::JwtService;
use crate::domains::projects::models::{Project, ProjectFilter, ProjectStatus};

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";
pub const TEST_CAMPAIGN_DOMAIN: &str = "gofundme.com";

// =============================================================================
// In-memory Project Store
// =============================================================================

#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: Mutex<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project directly, bypassing submission
    pub fn with_project(self, project: Project) -> Self {
        self.projects
            .lock()
            .unwrap()
            .insert(project.id, project);
        self
    }

    pub fn len(&self) -> usize {
        self.projects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of a stored project, if any
    pub fn snapshot(&self, id: ProjectId) -> Option<Project> {
        self.projects.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl BaseProjectStore for InMemoryProjectStore {
    async fn create(&self, project: Project) -> Result<ProjectId, StoreError> {
        let id = project.id;
        self.projects.lock().unwrap().insert(id, project);
        Ok(id)
    }

    async fn get(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.snapshot(id).ok_or(StoreError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: ProjectId,
        expected: ProjectStatus,
        next: ProjectStatus,
        rejection_reason: Option<String>,
    ) -> Result<Project, StoreError> {
        // Check and write under one lock
        let mut projects = self.projects.lock().unwrap();
        let project = projects.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if project.status != expected {
            return Err(StoreError::StatusMismatch {
                id,
                expected,
                actual: project.status,
            });
        }

        project.status = next;
        project.rejection_reason = rejection_reason;
        Ok(project.clone())
    }

    async fn list(&self, filter: ProjectFilter) -> Result<Vec<Project>, StoreError> {
        let mut projects: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        projects.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(projects)
    }

    async fn count_by_status(&self) -> Result<Vec<(ProjectStatus, i64)>, StoreError> {
        let projects = self.projects.lock().unwrap();
        let mut counts: HashMap<ProjectStatus, i64> = HashMap::new();
        for project in projects.values() {
            *counts.entry(project.status).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }
}

// =============================================================================
// In-memory Role Store
// =============================================================================

#[derive(Default)]
pub struct InMemoryRoleStore {
    admins: Mutex<HashSet<MemberId>>,
    failing: AtomicBool,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(self, member_id: MemberId) -> Self {
        self.grant_admin(member_id);
        self
    }

    pub fn grant_admin(&self, member_id: MemberId) {
        self.admins.lock().unwrap().insert(member_id);
    }

    pub fn revoke_admin(&self, member_id: MemberId) {
        self.admins.lock().unwrap().remove(&member_id);
    }

    /// Make every lookup fail until switched off again
    pub fn fail_lookups(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRoleStore for InMemoryRoleStore {
    async fn is_admin(&self, member_id: MemberId) -> Result<bool> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("role store unavailable");
        }
        Ok(self.admins.lock().unwrap().contains(&member_id))
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub projects: Arc<InMemoryProjectStore>,
    pub roles: Arc<InMemoryRoleStore>,
    pub jwt_service: Arc<JwtService>,
    pub campaign_domain: String,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(InMemoryProjectStore::new()),
            roles: Arc::new(InMemoryRoleStore::new()),
            jwt_service: Arc::new(JwtService::new(
                TEST_JWT_SECRET,
                TEST_JWT_ISSUER.to_string(),
            )),
            campaign_domain: TEST_CAMPAIGN_DOMAIN.to_string(),
        }
    }

    pub fn campaign_domain(mut self, domain: &str) -> Self {
        self.campaign_domain = domain.to_string();
        self
    }

    /// Issue a session token the test JWT service will accept
    pub fn token_for(&self, member_id: MemberId) -> String {
        self.jwt_service
            .create_token(member_id)
            .expect("test token creation should not fail")
    }

    /// Build ServerDeps sharing these stores
    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(
            self.projects,
            self.roles,
            self.jwt_service,
            self.campaign_domain,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use crate::domains::projects::models::ProjectCategory;
    use crate::domains::projects::validation::ProjectDraft;

    fn pending_project(minutes_ago: i64) -> Project {
        let draft = ProjectDraft {
            title: "School garden renovation".to_string(),
            description: "x".repeat(60),
            campaign_link: "https://www.gofundme.com/f/garden".to_string(),
            image_url: None,
            category: ProjectCategory::Education,
            goal_amount: Decimal::from(500),
            contact_name: "Ana".to_string(),
            contact_email: "ana@school.org".to_string(),
            contact_phone: None,
        };
        Project::pending(
            draft,
            MemberId::new(),
            Utc::now() - Duration::minutes(minutes_ago),
        )
    }

    #[tokio::test]
    async fn test_update_status_is_compare_and_set() {
        let project = pending_project(0);
        let id = project.id;
        let store = InMemoryProjectStore::new().with_project(project);

        let updated = store
            .update_status(id, ProjectStatus::Pending, ProjectStatus::Active, None)
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Active);

        let second = store
            .update_status(
                id,
                ProjectStatus::Pending,
                ProjectStatus::Rejected,
                Some("late".to_string()),
            )
            .await;
        assert!(matches!(
            second,
            Err(StoreError::StatusMismatch {
                actual: ProjectStatus::Active,
                ..
            })
        ));
        assert_eq!(store.snapshot(id).unwrap().rejection_reason, None);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let store = InMemoryProjectStore::new();
        let result = store
            .update_status(
                ProjectId::new(),
                ProjectStatus::Pending,
                ProjectStatus::Active,
                None,
            )
            .await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let old = pending_project(30);
        let new = pending_project(5);
        let (old_id, new_id) = (old.id, new.id);
        let store = InMemoryProjectStore::new()
            .with_project(old)
            .with_project(new);

        let listed = store
            .list(ProjectFilter::status(ProjectStatus::Pending))
            .await
            .unwrap();
        let ids: Vec<_> = listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![new_id, old_id]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_transitions_have_one_winner() {
        let project = pending_project(0);
        let id = project.id;
        let store = Arc::new(InMemoryProjectStore::new().with_project(project));

        let approve = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_status(id, ProjectStatus::Pending, ProjectStatus::Active, None)
                    .await
            })
        };
        let reject = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_status(
                        id,
                        ProjectStatus::Pending,
                        ProjectStatus::Rejected,
                        Some("duplicate".to_string()),
                    )
                    .await
            })
        };

        let results = [approve.await.unwrap(), reject.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);

        let stored = store.snapshot(id).unwrap();
        match stored.status {
            ProjectStatus::Active => assert!(stored.rejection_reason.is_none()),
            ProjectStatus::Rejected => {
                assert_eq!(stored.rejection_reason.as_deref(), Some("duplicate"))
            }
            ProjectStatus::Pending => panic!("no transition applied"),
        }
    }

    #[tokio::test]
    async fn test_role_store_failure_mode() {
        let member = MemberId::new();
        let roles = InMemoryRoleStore::new().with_admin(member);
        assert!(roles.is_admin(member).await.unwrap());

        roles.fail_lookups(true);
        assert!(roles.is_admin(member).await.is_err());
    }
}
