use serde::{Deserialize, Serialize};

/// Closed enumeration of the action tags the system knows how to render.
///
/// The persisted `action` field stays an open string so unrecognized tags
/// round-trip untouched; dispatch (category, icon) goes through this enum,
/// with `Unknown` as the fallback for any tag outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    TicketCreated,
    TicketAssigned,
    StatusChanged,
    CommentAdded,
    CsatSubmitted,
    PriorityChanged,
    FileAttached,
    AccountCreated,
    Unknown,
}

/// Coarse grouping used by activity feeds to pick a section per entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Ticket,
    Feedback,
    Attachment,
    Account,
    General,
}

impl ActionKind {
    /// Parse a raw action tag. Never fails: anything outside the known set
    /// maps to `ActionKind::Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ticket_created" => ActionKind::TicketCreated,
            "ticket_assigned" => ActionKind::TicketAssigned,
            "status_changed" => ActionKind::StatusChanged,
            "comment_added" => ActionKind::CommentAdded,
            "csat_submitted" => ActionKind::CsatSubmitted,
            "priority_changed" => ActionKind::PriorityChanged,
            "file_attached" => ActionKind::FileAttached,
            "account_created" => ActionKind::AccountCreated,
            _ => ActionKind::Unknown,
        }
    }

    /// The wire tag written into activity log records
    pub fn as_tag(&self) -> &'static str {
        match self {
            ActionKind::TicketCreated => "ticket_created",
            ActionKind::TicketAssigned => "ticket_assigned",
            ActionKind::StatusChanged => "status_changed",
            ActionKind::CommentAdded => "comment_added",
            ActionKind::CsatSubmitted => "csat_submitted",
            ActionKind::PriorityChanged => "priority_changed",
            ActionKind::FileAttached => "file_attached",
            ActionKind::AccountCreated => "account_created",
            ActionKind::Unknown => "unknown",
        }
    }

    pub fn category(&self) -> ActionCategory {
        match self {
            ActionKind::TicketCreated
            | ActionKind::TicketAssigned
            | ActionKind::StatusChanged
            | ActionKind::CommentAdded
            | ActionKind::PriorityChanged => ActionCategory::Ticket,
            ActionKind::CsatSubmitted => ActionCategory::Feedback,
            ActionKind::FileAttached => ActionCategory::Attachment,
            ActionKind::AccountCreated => ActionCategory::Account,
            ActionKind::Unknown => ActionCategory::General,
        }
    }

    /// Icon slug shown next to the entry in activity feeds
    pub fn icon(&self) -> &'static str {
        match self {
            ActionKind::TicketCreated => "plus-circle",
            ActionKind::TicketAssigned => "user-check",
            ActionKind::StatusChanged => "refresh-cw",
            ActionKind::CommentAdded => "message-square",
            ActionKind::CsatSubmitted => "star",
            ActionKind::PriorityChanged => "flag",
            ActionKind::FileAttached => "paperclip",
            ActionKind::AccountCreated => "user-plus",
            ActionKind::Unknown => "activity",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
