use async_trait::async_trait;
use hdts_db::models::employee::EmployeeUserModel;

use crate::domain::registration::RegistrationRequest;
use crate::error::ApiResult;

/// Registration and lookups over the employee directory
#[async_trait]
pub trait EmployeeDirectoryService: Send + Sync {
    /// Validate a registration payload, persist the account and log an
    /// `account_created` activity.
    ///
    /// # Returns
    /// * `Ok(EmployeeUserModel)` - The created account
    /// * `Err(ApiError::ValidationError)` - A field rule failed or the
    ///   email is already taken
    async fn register(&self, request: RegistrationRequest) -> ApiResult<EmployeeUserModel>;

    /// Every directory account, in persisted order
    async fn list_employees(&self) -> ApiResult<Vec<EmployeeUserModel>>;

    /// Whether an account already uses this email (trimmed, case-sensitive)
    async fn email_exists(&self, email: &str) -> ApiResult<bool>;
}
