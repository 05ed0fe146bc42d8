use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::employee::common_enums::UserRole;
use crate::models::identifiable::Identifiable;

/// A directory account created through registration or seeding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUserModel {
    pub id: i64,
    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,
    /// Uniqueness is enforced case-sensitively on the trimmed value
    pub email: HeaplessString<100>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<HeaplessString<50>>,
    pub created_at: DateTime<Utc>,
}

impl EmployeeUserModel {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for EmployeeUserModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a directory account. The id and creation timestamp
/// are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployeeUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
}

impl NewEmployeeUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        department: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role,
            department,
        }
    }
}
