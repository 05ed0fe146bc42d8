use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::activity::action_kind::ActionKind;
use crate::models::identifiable::Identifiable;

/// A single append-only activity log record.
///
/// Field names serialize in camelCase to stay byte-compatible with the
/// documents already present in existing data files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntryModel {
    /// Monotonically assigned integer id, unique within the collection
    pub id: i64,
    /// Id of the user who performed the action
    pub user_id: i64,
    /// Display name captured at append time
    pub user_name: HeaplessString<100>,
    pub timestamp: DateTime<Utc>,
    /// Raw action tag. Kept open so unrecognized tags survive round-trips;
    /// use [`ActivityLogEntryModel::action_kind`] for dispatch.
    pub action: HeaplessString<50>,
    /// Kind of entity the action touched, e.g. "ticket" or "user"
    pub target_type: HeaplessString<30>,
    /// Identifier of the touched entity within its own collection
    pub target_id: HeaplessString<50>,
    /// Human-readable summary of what happened
    pub details: HeaplessString<250>,
}

impl ActivityLogEntryModel {
    /// Resolve the raw action tag into the closed [`ActionKind`] set
    pub fn action_kind(&self) -> ActionKind {
        ActionKind::from_tag(self.action.as_str())
    }
}

impl Identifiable for ActivityLogEntryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Payload for appending a new activity entry. Ids and timestamps are
/// assigned by the store at append time, never by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivityLog {
    pub user_id: i64,
    pub user_name: String,
    pub action: ActionKind,
    pub target_type: String,
    pub target_id: String,
    pub details: String,
}

impl NewActivityLog {
    pub fn new(
        user_id: i64,
        user_name: impl Into<String>,
        action: ActionKind,
        target_type: impl Into<String>,
        target_id: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            action,
            target_type: target_type.into(),
            target_id: target_id.into(),
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> ActivityLogEntryModel {
        ActivityLogEntryModel {
            id: 7,
            user_id: 3,
            user_name: HeaplessString::try_from("Amina Diallo").unwrap(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
            action: HeaplessString::try_from("ticket_created").unwrap(),
            target_type: HeaplessString::try_from("ticket").unwrap(),
            target_id: HeaplessString::try_from("TK-1042").unwrap(),
            details: HeaplessString::try_from("Created ticket TK-1042").unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["userName"], "Amina Diallo");
        assert_eq!(json["targetType"], "ticket");
        assert_eq!(json["targetId"], "TK-1042");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn deserializes_persisted_document() {
        let raw = r#"{
            "id": 7,
            "userId": 3,
            "userName": "Amina Diallo",
            "timestamp": "2025-03-14T09:30:00Z",
            "action": "ticket_created",
            "targetType": "ticket",
            "targetId": "TK-1042",
            "details": "Created ticket TK-1042"
        }"#;
        let entry: ActivityLogEntryModel = serde_json::from_str(raw).unwrap();
        assert_eq!(entry, sample_entry());
    }

    #[test]
    fn action_kind_resolves_raw_tag() {
        let mut entry = sample_entry();
        assert_eq!(entry.action_kind(), ActionKind::TicketCreated);

        entry.action = HeaplessString::try_from("sla_breached").unwrap();
        assert_eq!(entry.action_kind(), ActionKind::Unknown);
    }

    #[test]
    fn get_id_returns_record_id() {
        assert_eq!(sample_entry().get_id(), 7);
    }
}
