use hdts_db::models::employee::EmployeeUserModel;
use hdts_db::repository::backend::StorageBackend;

use super::repo_impl::EmployeeUserRepositoryImpl;

impl<B: StorageBackend> EmployeeUserRepositoryImpl<B> {
    /// The input is trimmed, then compared case-sensitively against stored
    /// emails.
    pub(super) async fn find_by_email_impl(
        repo: &EmployeeUserRepositoryImpl<B>,
        email: &str,
    ) -> Result<Option<EmployeeUserModel>, Box<dyn std::error::Error + Send + Sync>> {
        let candidate = email.trim();
        let employees = Self::read_all(repo).await?;
        Ok(employees
            .into_iter()
            .find(|e| e.email.as_str() == candidate))
    }
}
