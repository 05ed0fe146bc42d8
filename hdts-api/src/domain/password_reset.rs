use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validation::{
    validate_email_format, validate_password_confirmation, validate_password_policy,
    validate_required,
};

/// Payload submitted by the password reset form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordResetRequest {
    /// Run every field rule and collect `(field, message)` pairs in form
    /// order
    pub fn field_errors(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();

        if let Err(msg) = validate_required(&self.email, "Email") {
            errors.push(("email", msg));
        } else if let Err(msg) = validate_email_format(&self.email) {
            errors.push(("email", msg));
        }

        if let Err(msg) = validate_required(&self.new_password, "Password") {
            errors.push(("new_password", msg));
        } else if let Err(msg) = validate_password_policy(&self.new_password) {
            errors.push(("new_password", msg));
        }

        if let Err(msg) = validate_password_confirmation(&self.new_password, &self.confirm_password)
        {
            errors.push(("confirm_password", msg));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_valid_reset_has_no_field_errors() {
        let request = PasswordResetRequest {
            email: "user@company.com".to_string(),
            new_password: "N3w!secret".to_string(),
            confirm_password: "N3w!secret".to_string(),
        };
        assert!(request.field_errors().is_empty());
    }

    #[test]
    fn weak_password_and_mismatch_are_both_reported() {
        let request = PasswordResetRequest {
            email: "user@company.com".to_string(),
            new_password: "abc".to_string(),
            confirm_password: "abcd".to_string(),
        };
        let errors = request.field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].0, "new_password");
        assert_eq!(errors[1], ("confirm_password", "Passwords do not match".to_string()));
    }

    #[test]
    fn malformed_email_is_reported() {
        let request = PasswordResetRequest {
            email: "not-an-email".to_string(),
            new_password: "N3w!secret".to_string(),
            confirm_password: "N3w!secret".to_string(),
        };
        assert_eq!(
            request.field_errors(),
            vec![("email", "Please enter a valid email address".to_string())]
        );
    }
}
