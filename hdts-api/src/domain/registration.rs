use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validation::{
    validate_email_format, validate_min_length, validate_password_confirmation,
    validate_password_policy, validate_required,
};

/// Payload submitted by the account registration form.
///
/// The derive covers the shape rules usable at an API boundary; the full
/// form rule set (password policy, confirmation, per-field messages) runs
/// through [`RegistrationRequest::field_errors`]. Email uniqueness needs
/// the directory and is checked by the registration service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// Run every field rule and collect `(field, message)` pairs, one per
    /// failed rule, in form order. An empty result means the payload is
    /// valid apart from store-backed checks.
    pub fn field_errors(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();

        if let Err(msg) = validate_required(&self.first_name, "First name") {
            errors.push(("first_name", msg));
        } else if let Err(msg) = validate_min_length(&self.first_name, 2, "First name") {
            errors.push(("first_name", msg));
        }

        if let Err(msg) = validate_required(&self.last_name, "Last name") {
            errors.push(("last_name", msg));
        } else if let Err(msg) = validate_min_length(&self.last_name, 2, "Last name") {
            errors.push(("last_name", msg));
        }

        if let Err(msg) = validate_required(&self.email, "Email") {
            errors.push(("email", msg));
        } else if let Err(msg) = validate_email_format(&self.email) {
            errors.push(("email", msg));
        }

        if let Err(msg) = validate_required(&self.password, "Password") {
            errors.push(("password", msg));
        } else if let Err(msg) = validate_password_policy(&self.password) {
            errors.push(("password", msg));
        }

        if let Err(msg) = validate_password_confirmation(&self.password, &self.confirm_password) {
            errors.push(("confirm_password", msg));
        }

        errors
    }
}
