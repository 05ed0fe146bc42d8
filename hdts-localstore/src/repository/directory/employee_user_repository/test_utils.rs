use hdts_db::models::employee::{NewEmployeeUser, UserRole};

pub fn create_test_employee(email: &str) -> NewEmployeeUser {
    NewEmployeeUser::new(
        "Nadia",
        "Benali",
        email,
        UserRole::Employee,
        Some("Operations".to_string()),
    )
}
