use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::ticket::common_enums::{TicketPriority, TicketStatus};
use crate::views::table_query::TableRecord;

/// A helpdesk ticket as persisted in the local store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketModel {
    pub id: i64,
    /// Public reference, e.g. `TCKT-1004`. Activity log `target_id`s carry
    /// this string, not the integer id.
    pub ticket_number: HeaplessString<20>,
    pub subject: HeaplessString<100>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: HeaplessString<50>,
    pub requester_name: HeaplessString<100>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<HeaplessString<100>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for TicketModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl TableRecord for TicketModel {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.ticket_number.to_string(),
            self.subject.to_string(),
            self.requester_name.to_string(),
        ]
    }

    fn tab_value(&self) -> String {
        self.status.as_tag().to_string()
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "priority" => Some(self.priority.as_tag().to_string()),
            "category" => Some(self.category.to_string()),
            "requester" => Some(self.requester_name.to_string()),
            "assignee" => self.assignee_name.as_ref().map(|a| a.to_string()),
            _ => None,
        }
    }
}

/// Payload for opening a ticket. The id, ticket number, status and
/// timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub subject: String,
    pub priority: TicketPriority,
    pub category: String,
    pub requester_name: String,
}

impl NewTicket {
    pub fn new(
        subject: impl Into<String>,
        priority: TicketPriority,
        category: impl Into<String>,
        requester_name: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            priority,
            category: category.into(),
            requester_name: requester_name.into(),
        }
    }
}
