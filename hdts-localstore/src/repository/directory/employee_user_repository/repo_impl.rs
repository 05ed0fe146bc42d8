use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use hdts_db::models::employee::EmployeeUserModel;
use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::list_all::ListAll;
use hdts_db::repository::load::Load;

use crate::keys::EMPLOYEE_USERS_KEY;

/// Repository over the employee directory collection
pub struct EmployeeUserRepositoryImpl<B: StorageBackend> {
    pub(crate) backend: Arc<B>,
}

impl<B: StorageBackend> EmployeeUserRepositoryImpl<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// The account using this email, matched exactly on the trimmed input
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EmployeeUserModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::find_by_email_impl(self, email).await
    }

    pub(super) async fn read_all(
        repo: &EmployeeUserRepositoryImpl<B>,
    ) -> Result<Vec<EmployeeUserModel>, Box<dyn std::error::Error + Send + Sync>> {
        match repo.backend.read(EMPLOYEE_USERS_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(employees) => Ok(employees),
                Err(err) => {
                    warn!("persisted document under '{EMPLOYEE_USERS_KEY}' failed to parse: {err}");
                    Err(err.into())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub(super) async fn write_all(
        repo: &EmployeeUserRepositoryImpl<B>,
        employees: &[EmployeeUserModel],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let raw = serde_json::to_string(employees)?;
        repo.backend.write(EMPLOYEE_USERS_KEY, &raw).await
    }
}

#[async_trait]
impl<B: StorageBackend> ListAll<B, EmployeeUserModel> for EmployeeUserRepositoryImpl<B> {
    async fn list_all(
        &self,
    ) -> Result<Vec<EmployeeUserModel>, Box<dyn std::error::Error + Send + Sync>> {
        Self::read_all(self).await
    }
}

#[async_trait]
impl<B: StorageBackend> Load<B, EmployeeUserModel> for EmployeeUserRepositoryImpl<B> {
    async fn load(
        &self,
        id: i64,
    ) -> Result<Option<EmployeeUserModel>, Box<dyn std::error::Error + Send + Sync>> {
        let employees = Self::read_all(self).await?;
        Ok(employees.into_iter().find(|e| e.id == id))
    }
}
