use hdts_db::models::employee::EmployeeUserModel;

/// Symbols accepted by the password policy's special-character requirement
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?`~";

/// Minimum password length enforced by [`validate_password_policy`]
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Check that a value is non-empty after trimming
///
/// # Arguments
/// * `value` - The raw form input
/// * `field_label` - Human-facing field name used in the error message
pub fn validate_required(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field_label} is required"))
    } else {
        Ok(())
    }
}

/// Check that a trimmed value reaches a minimum character count
pub fn validate_min_length(value: &str, min: usize, field_label: &str) -> Result<(), String> {
    if value.trim().chars().count() < min {
        Err(format!("{field_label} must be at least {min} characters"))
    } else {
        Ok(())
    }
}

/// Check that a value has the shape `local@domain.tld`.
///
/// This is the permissive form check ("something, an @, a domain with a
/// dot"), not RFC 5322. Deliverability is a backend concern.
pub fn validate_email_format(value: &str) -> Result<(), String> {
    let candidate = value.trim();
    let valid = match candidate.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && !domain.contains('@')
                && !domain.contains(char::is_whitespace)
                && match domain.rsplit_once('.') {
                    Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                    None => false,
                }
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

/// Check that no existing account already uses this email.
///
/// The candidate is trimmed, then compared case-sensitively against the
/// stored emails. `User@x.com` and `user@x.com` therefore count as
/// different addresses.
pub fn validate_email_unique(value: &str, existing: &[EmployeeUserModel]) -> Result<(), String> {
    let candidate = value.trim();
    if existing.iter().any(|e| e.email.as_str() == candidate) {
        Err("An account with this email already exists".to_string())
    } else {
        Ok(())
    }
}

/// Check the password policy: at least 8 characters, one uppercase letter,
/// one digit and one symbol from [`PASSWORD_SYMBOLS`].
///
/// The error message enumerates only the requirements the value misses,
/// comma-joined with a final "and". The value is checked as typed; leading
/// and trailing whitespace is significant in a password.
pub fn validate_password_policy(value: &str) -> Result<(), String> {
    let mut missing: Vec<&str> = Vec::new();
    if value.chars().count() < PASSWORD_MIN_LENGTH {
        missing.push("be at least 8 characters");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("contain an uppercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        missing.push("contain a number");
    }
    if !value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        missing.push("contain a special character");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("Password must {}", join_with_and(&missing)))
    }
}

/// Check that the confirmation retype matches the password exactly
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match".to_string())
    }
}

fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hdts_db::models::employee::UserRole;
    use heapless::String as HeaplessString;

    fn employee_with_email(email: &str) -> EmployeeUserModel {
        EmployeeUserModel {
            id: 1,
            first_name: HeaplessString::try_from("Test").unwrap(),
            last_name: HeaplessString::try_from("User").unwrap(),
            email: HeaplessString::try_from(email).unwrap(),
            role: UserRole::Employee,
            department: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert_eq!(
            validate_required("", "Email"),
            Err("Email is required".to_string())
        );
        assert_eq!(
            validate_required("   ", "First name"),
            Err("First name is required".to_string())
        );
        assert_eq!(validate_required("x", "Email"), Ok(()));
    }

    #[test]
    fn min_length_counts_trimmed_characters() {
        assert_eq!(
            validate_min_length(" a ", 2, "First name"),
            Err("First name must be at least 2 characters".to_string())
        );
        assert_eq!(validate_min_length("Al", 2, "First name"), Ok(()));
    }

    #[test]
    fn email_format_accepts_plain_addresses() {
        for email in ["user@example.com", " user@example.com ", "a.b@c.d.org"] {
            assert_eq!(validate_email_format(email), Ok(()), "{email}");
        }
    }

    #[test]
    fn email_format_rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@example.",
            "user@.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@@example.com",
        ] {
            assert!(validate_email_format(email).is_err(), "{email}");
        }
    }

    #[test]
    fn uniqueness_trims_then_matches_case_sensitively() {
        let existing = vec![employee_with_email("x@y.com")];
        assert_eq!(
            validate_email_unique(" x@y.com ", &existing),
            Err("An account with this email already exists".to_string())
        );
        assert_eq!(validate_email_unique("z@y.com", &existing), Ok(()));
        assert_eq!(validate_email_unique("X@y.com", &existing), Ok(()));
    }

    #[test]
    fn password_policy_enumerates_every_missing_requirement() {
        assert_eq!(
            validate_password_policy("abc"),
            Err("Password must be at least 8 characters, contain an uppercase letter, \
                 contain a number, and contain a special character"
                .to_string())
        );
    }

    #[test]
    fn password_policy_enumerates_only_what_is_missing() {
        assert_eq!(
            validate_password_policy("abcdefg1"),
            Err("Password must contain an uppercase letter and contain a special character"
                .to_string())
        );
        assert_eq!(
            validate_password_policy("Abcdefgh1"),
            Err("Password must contain a special character".to_string())
        );
    }

    #[test]
    fn password_policy_accepts_a_conforming_password() {
        assert_eq!(validate_password_policy("Abcdefg1!"), Ok(()));
        assert_eq!(validate_password_policy("P@ssw0rd"), Ok(()));
    }

    #[test]
    fn password_policy_does_not_trim() {
        // "A1!" padded with five spaces reaches 8 characters as typed
        assert_eq!(validate_password_policy("A1!     "), Ok(()));
    }

    #[test]
    fn confirmation_requires_exact_equality() {
        assert_eq!(validate_password_confirmation("Abc123!@", "Abc123!@"), Ok(()));
        assert_eq!(
            validate_password_confirmation("Abc123!@", "abc123!@"),
            Err("Passwords do not match".to_string())
        );
    }
}
