use async_trait::async_trait;
use tracing::info;

use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::initialize::Initialize;

use crate::keys::EMPLOYEE_USERS_KEY;
use crate::seed;

use super::repo_impl::EmployeeUserRepositoryImpl;

impl<B: StorageBackend> EmployeeUserRepositoryImpl<B> {
    pub(super) async fn initialize_impl(
        repo: &EmployeeUserRepositoryImpl<B>,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if repo.backend.read(EMPLOYEE_USERS_KEY).await?.is_some() {
            return Ok(false);
        }

        let employees = seed::seed_employee_users()?;
        Self::write_all(repo, &employees).await?;
        info!("seeded {} employee accounts", employees.len());
        Ok(true)
    }
}

#[async_trait]
impl<B: StorageBackend> Initialize<B> for EmployeeUserRepositoryImpl<B> {
    async fn initialize(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Self::initialize_impl(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_employee;
    use crate::test_helper::{setup_test_context, setup_uninitialized_context};
    use hdts_db::repository::append::Append;
    use hdts_db::repository::initialize::Initialize;
    use hdts_db::repository::list_all::ListAll;

    #[tokio::test]
    async fn test_initialize_seeds_an_empty_store(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_uninitialized_context();
        let repo = &ctx.directory_repos().employee_user_repository;

        assert!(repo.initialize().await?);
        assert_eq!(repo.list_all().await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_reinitialize_keeps_registered_accounts(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.directory_repos().employee_user_repository;

        let created = repo
            .append(create_test_employee("nadia.benali@company.com"))
            .await?;
        assert!(!repo.initialize().await?);

        let employees = repo.list_all().await?;
        assert_eq!(employees.len(), 6);
        assert!(employees.iter().any(|e| e.id == created.id));
        Ok(())
    }
}
