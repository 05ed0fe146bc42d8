use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use hdts_db::models::employee::{EmployeeUserModel, NewEmployeeUser};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;

use crate::utils::{to_bounded, to_optional_bounded};

use super::repo_impl::EmployeeUserRepositoryImpl;

impl<B: StorageBackend> EmployeeUserRepositoryImpl<B> {
    pub(super) async fn create_impl(
        repo: &EmployeeUserRepositoryImpl<B>,
        new_employee: NewEmployeeUser,
    ) -> Result<EmployeeUserModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut employees = Self::read_all(repo).await?;

        let next_id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let employee = EmployeeUserModel {
            id: next_id,
            first_name: to_bounded(&new_employee.first_name, "first_name")?,
            last_name: to_bounded(&new_employee.last_name, "last_name")?,
            email: to_bounded(&new_employee.email, "email")?,
            role: new_employee.role,
            department: to_optional_bounded(new_employee.department.as_deref(), "department")?,
            created_at: Utc::now(),
        };

        employees.push(employee.clone());
        Self::write_all(repo, &employees).await?;
        debug!("created employee account {next_id}");
        Ok(employee)
    }
}

#[async_trait]
impl<B: StorageBackend> Append<B, EmployeeUserModel> for EmployeeUserRepositoryImpl<B> {
    type NewRecord = NewEmployeeUser;

    async fn append(
        &self,
        new_record: NewEmployeeUser,
    ) -> Result<EmployeeUserModel, Box<dyn std::error::Error + Send + Sync>> {
        Self::create_impl(self, new_record).await
    }
}
