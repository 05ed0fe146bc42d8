//! Demo data written by the repositories' `initialize` step.
//!
//! Timestamps are fixed instants, not `now`, so seeded stores are
//! reproducible and date-range queries against them are deterministic.

use chrono::{DateTime, Utc};
use std::error::Error;

use hdts_db::models::activity::{ActionKind, ActivityLogEntryModel};
use hdts_db::models::employee::{EmployeeUserModel, UserRole};
use hdts_db::models::ticket::{TicketModel, TicketPriority, TicketStatus};

use crate::utils::{to_bounded, to_optional_bounded};

fn seed_ts(value: &str) -> Result<DateTime<Utc>, Box<dyn Error + Send + Sync>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

#[allow(clippy::too_many_arguments)]
fn activity(
    id: i64,
    user_id: i64,
    user_name: &str,
    timestamp: &str,
    action: ActionKind,
    target_type: &str,
    target_id: &str,
    details: &str,
) -> Result<ActivityLogEntryModel, Box<dyn Error + Send + Sync>> {
    Ok(ActivityLogEntryModel {
        id,
        user_id,
        user_name: to_bounded(user_name, "user_name")?,
        timestamp: seed_ts(timestamp)?,
        action: to_bounded(action.as_tag(), "action")?,
        target_type: to_bounded(target_type, "target_type")?,
        target_id: to_bounded(target_id, "target_id")?,
        details: to_bounded(details, "details")?,
    })
}

/// Activity log entries seeded into an empty store
pub fn seed_activity_logs() -> Result<Vec<ActivityLogEntryModel>, Box<dyn Error + Send + Sync>> {
    Ok(vec![
        activity(
            1,
            1,
            "Amina Diallo",
            "2025-03-10T09:15:00Z",
            ActionKind::TicketCreated,
            "ticket",
            "TCKT-1001",
            "Created ticket TCKT-1001: VPN connection drops every hour",
        )?,
        activity(
            2,
            2,
            "Sarah Johnson",
            "2025-03-10T10:05:00Z",
            ActionKind::TicketAssigned,
            "ticket",
            "TCKT-1001",
            "Assigned TCKT-1001 to Mike Chen",
        )?,
        activity(
            3,
            3,
            "Mike Chen",
            "2025-03-10T11:30:00Z",
            ActionKind::StatusChanged,
            "ticket",
            "TCKT-1001",
            "Moved TCKT-1001 from Open to In Progress",
        )?,
        activity(
            4,
            4,
            "Omar Haddad",
            "2025-03-11T08:45:00Z",
            ActionKind::TicketCreated,
            "ticket",
            "TCKT-1002",
            "Created ticket TCKT-1002: Printer offline on floor 3",
        )?,
        activity(
            5,
            3,
            "Mike Chen",
            "2025-03-11T14:20:00Z",
            ActionKind::CommentAdded,
            "ticket",
            "TCKT-1001",
            "Commented on TCKT-1001: replacement cable ordered",
        )?,
        activity(
            6,
            2,
            "Sarah Johnson",
            "2025-03-12T09:00:00Z",
            ActionKind::PriorityChanged,
            "ticket",
            "TCKT-1002",
            "Raised TCKT-1002 priority from Medium to High",
        )?,
        activity(
            7,
            5,
            "Lena Fischer",
            "2025-03-12T16:40:00Z",
            ActionKind::FileAttached,
            "ticket",
            "TCKT-1002",
            "Attached printer-diagnostics.log to TCKT-1002",
        )?,
        activity(
            8,
            1,
            "Amina Diallo",
            "2025-03-13T10:10:00Z",
            ActionKind::CsatSubmitted,
            "ticket",
            "TCKT-1001",
            "Rated TCKT-1001 3/5",
        )?,
        activity(
            9,
            5,
            "Lena Fischer",
            "2025-03-13T11:00:00Z",
            ActionKind::AccountCreated,
            "user",
            "5",
            "Account created for lena.fischer@company.com",
        )?,
    ])
}

fn employee(
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: UserRole,
    department: Option<&str>,
    created_at: &str,
) -> Result<EmployeeUserModel, Box<dyn Error + Send + Sync>> {
    Ok(EmployeeUserModel {
        id,
        first_name: to_bounded(first_name, "first_name")?,
        last_name: to_bounded(last_name, "last_name")?,
        email: to_bounded(email, "email")?,
        role,
        department: to_optional_bounded(department, "department")?,
        created_at: seed_ts(created_at)?,
    })
}

/// Directory accounts seeded into an empty store
pub fn seed_employee_users() -> Result<Vec<EmployeeUserModel>, Box<dyn Error + Send + Sync>> {
    Ok(vec![
        employee(
            1,
            "Amina",
            "Diallo",
            "amina.diallo@company.com",
            UserRole::Employee,
            Some("Finance"),
            "2025-01-06T08:00:00Z",
        )?,
        employee(
            2,
            "Sarah",
            "Johnson",
            "sarah.johnson@company.com",
            UserRole::Coordinator,
            Some("IT Support"),
            "2025-01-06T08:05:00Z",
        )?,
        employee(
            3,
            "Mike",
            "Chen",
            "mike.chen@company.com",
            UserRole::Employee,
            Some("IT Support"),
            "2025-01-07T09:30:00Z",
        )?,
        employee(
            4,
            "Omar",
            "Haddad",
            "omar.haddad@company.com",
            UserRole::Employee,
            Some("Operations"),
            "2025-01-20T13:15:00Z",
        )?,
        employee(
            5,
            "Lena",
            "Fischer",
            "lena.fischer@company.com",
            UserRole::Admin,
            Some("IT Support"),
            "2025-03-13T11:00:00Z",
        )?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: i64,
    ticket_number: &str,
    subject: &str,
    status: TicketStatus,
    priority: TicketPriority,
    category: &str,
    requester_name: &str,
    assignee_name: Option<&str>,
    created_at: &str,
    updated_at: &str,
) -> Result<TicketModel, Box<dyn Error + Send + Sync>> {
    Ok(TicketModel {
        id,
        ticket_number: to_bounded(ticket_number, "ticket_number")?,
        subject: to_bounded(subject, "subject")?,
        status,
        priority,
        category: to_bounded(category, "category")?,
        requester_name: to_bounded(requester_name, "requester_name")?,
        assignee_name: to_optional_bounded(assignee_name, "assignee_name")?,
        created_at: seed_ts(created_at)?,
        updated_at: seed_ts(updated_at)?,
    })
}

/// Tickets seeded into an empty store
pub fn seed_tickets() -> Result<Vec<TicketModel>, Box<dyn Error + Send + Sync>> {
    Ok(vec![
        ticket(
            1,
            "TCKT-1001",
            "VPN connection drops every hour",
            TicketStatus::InProgress,
            TicketPriority::High,
            "Network",
            "Amina Diallo",
            Some("Mike Chen"),
            "2025-03-10T09:15:00Z",
            "2025-03-11T14:20:00Z",
        )?,
        ticket(
            2,
            "TCKT-1002",
            "Printer offline on floor 3",
            TicketStatus::Open,
            TicketPriority::High,
            "Hardware",
            "Omar Haddad",
            None,
            "2025-03-11T08:45:00Z",
            "2025-03-12T16:40:00Z",
        )?,
        ticket(
            3,
            "TCKT-1003",
            "Password reset for shared mailbox",
            TicketStatus::Resolved,
            TicketPriority::Medium,
            "Accounts",
            "Lena Fischer",
            Some("Sarah Johnson"),
            "2025-03-05T10:00:00Z",
            "2025-03-06T09:10:00Z",
        )?,
        ticket(
            4,
            "TCKT-1004",
            "Laptop will not boot",
            TicketStatus::InProgress,
            TicketPriority::Urgent,
            "Hardware",
            "Amina Diallo",
            Some("Sarah Johnson"),
            "2025-03-10T11:00:00Z",
            "2025-03-11T15:45:00Z",
        )?,
        ticket(
            5,
            "TCKT-1005",
            "Request: second monitor",
            TicketStatus::Open,
            TicketPriority::Low,
            "Hardware",
            "Mike Chen",
            None,
            "2025-03-12T12:30:00Z",
            "2025-03-12T12:30:00Z",
        )?,
        ticket(
            6,
            "TCKT-1006",
            "Projector flickering in room 2B",
            TicketStatus::Closed,
            TicketPriority::Medium,
            "Facilities",
            "Omar Haddad",
            Some("Mike Chen"),
            "2025-02-20T14:00:00Z",
            "2025-02-25T16:20:00Z",
        )?,
    ])
}
