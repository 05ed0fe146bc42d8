use std::sync::Arc;

use async_trait::async_trait;

use hdts_api::domain::registration::RegistrationRequest;
use hdts_api::domain::validation::validate_email_unique;
use hdts_api::error::{ApiError, ApiResult};
use hdts_api::service::EmployeeDirectoryService;
use hdts_db::models::activity::{ActionKind, NewActivityLog};
use hdts_db::models::employee::{EmployeeUserModel, NewEmployeeUser, UserRole};
use hdts_db::repository::append::Append;
use hdts_db::repository::backend::StorageBackend;
use hdts_db::repository::list_all::ListAll;

use crate::repository::activity::activity_log_repository::ActivityLogRepositoryImpl;
use crate::repository::directory::employee_user_repository::EmployeeUserRepositoryImpl;

/// Employee directory service over the local store.
///
/// Registration runs the form-level field rules first and the store-backed
/// uniqueness check second; uniqueness is only consulted when the email
/// itself passed its own rules, matching how the form surfaces errors.
pub struct EmployeeDirectoryServiceImpl<B: StorageBackend> {
    employee_user_repository: Arc<EmployeeUserRepositoryImpl<B>>,
    activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
}

impl<B: StorageBackend> EmployeeDirectoryServiceImpl<B> {
    pub fn new(
        employee_user_repository: Arc<EmployeeUserRepositoryImpl<B>>,
        activity_log_repository: Arc<ActivityLogRepositoryImpl<B>>,
    ) -> Self {
        Self {
            employee_user_repository,
            activity_log_repository,
        }
    }
}

#[async_trait]
impl<B: StorageBackend> EmployeeDirectoryService for EmployeeDirectoryServiceImpl<B> {
    async fn register(&self, request: RegistrationRequest) -> ApiResult<EmployeeUserModel> {
        let mut errors = request.field_errors();

        if !errors.iter().any(|(field, _)| *field == "email") {
            let employees = self.employee_user_repository.list_all().await?;
            if let Err(message) = validate_email_unique(&request.email, &employees) {
                errors.push(("email", message));
            }
        }

        if !errors.is_empty() {
            let joined = errors
                .into_iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::ValidationError(joined));
        }

        let department = request
            .department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let new_user = NewEmployeeUser::new(
            request.first_name.trim(),
            request.last_name.trim(),
            request.email.trim(),
            UserRole::Employee,
            department,
        );
        let created = self.employee_user_repository.append(new_user).await?;

        let activity = NewActivityLog::new(
            created.id,
            created.full_name(),
            ActionKind::AccountCreated,
            "user",
            created.id.to_string(),
            format!("Account created for {}", created.email.as_str()),
        );
        self.activity_log_repository.append(activity).await?;

        Ok(created)
    }

    async fn list_employees(&self) -> ApiResult<Vec<EmployeeUserModel>> {
        Ok(self.employee_user_repository.list_all().await?)
    }

    async fn email_exists(&self, email: &str) -> ApiResult<bool> {
        Ok(self
            .employee_user_repository
            .find_by_email(email)
            .await?
            .is_some())
    }
}
