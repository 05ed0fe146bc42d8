use serde::{Deserialize, Serialize};

/// Role attached to a directory account, persisted as a lowercase tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Coordinator,
    Admin,
    Unknown,
}

impl UserRole {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "employee" => UserRole::Employee,
            "coordinator" => UserRole::Coordinator,
            "admin" => UserRole::Admin,
            _ => UserRole::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Coordinator => "coordinator",
            UserRole::Admin => "admin",
            UserRole::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
