//! Test helper module for repository and service tests
//!
//! Every context owns a private in-memory backend, so tests are fully
//! isolated from each other and never touch the filesystem.

use std::sync::Arc;

use crate::backend::in_memory::InMemoryBackend;
use crate::local_repositories::LocalRepositories;
use crate::repository::activity::ActivityRepositories;
use crate::repository::directory::DirectoryRepositories;
use crate::repository::session::SessionRepositories;
use crate::repository::ticketing::TicketingRepositories;

/// Test context wrapping a full repository set over an in-memory store
pub struct TestContext {
    pub repos: LocalRepositories<InMemoryBackend>,
    pub backend: Arc<InMemoryBackend>,
}

impl TestContext {
    /// Get the activity repositories from the context
    pub fn activity_repos(&self) -> &ActivityRepositories<InMemoryBackend> {
        &self.repos.activity_repos
    }

    /// Get the directory repositories from the context
    pub fn directory_repos(&self) -> &DirectoryRepositories<InMemoryBackend> {
        &self.repos.directory_repos
    }

    /// Get the ticketing repositories from the context
    pub fn ticketing_repos(&self) -> &TicketingRepositories<InMemoryBackend> {
        &self.repos.ticketing_repos
    }

    /// Get the session repositories from the context
    pub fn session_repos(&self) -> &SessionRepositories<InMemoryBackend> {
        &self.repos.session_repos
    }
}

/// Setup a test context over a freshly seeded in-memory store
///
/// The backing store starts empty and is seeded through the same
/// initialization path production uses, so every context sees the
/// standard seed rows and nothing else.
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let backend = Arc::new(InMemoryBackend::new());
    let repos = LocalRepositories::new(backend.clone());
    repos.initialize_all().await?;
    Ok(TestContext { repos, backend })
}

/// Setup a test context over an empty store, skipping seeding entirely
pub fn setup_uninitialized_context() -> TestContext {
    let backend = Arc::new(InMemoryBackend::new());
    let repos = LocalRepositories::new(backend.clone());
    TestContext { repos, backend }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity::activity_log_repository::test_utils::create_test_activity;
    use hdts_db::repository::append::Append;
    use hdts_db::repository::list_all::ListAll;

    #[tokio::test]
    async fn test_contexts_do_not_share_state(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let first = setup_test_context().await?;
        first
            .activity_repos()
            .activity_log_repository
            .append(create_test_activity(1, "Amina Diallo"))
            .await?;

        let second = setup_test_context().await?;
        assert_eq!(
            second
                .activity_repos()
                .activity_log_repository
                .list_all()
                .await?
                .len(),
            9
        );
        Ok(())
    }
}
