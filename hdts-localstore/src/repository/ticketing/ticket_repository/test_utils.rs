use hdts_db::models::ticket::common_enums::TicketPriority;
use hdts_db::models::ticket::ticket::NewTicket;

/// Builds a medium-priority hardware ticket for repository tests.
pub fn create_test_ticket(subject: &str) -> NewTicket {
    NewTicket::new(subject, TicketPriority::Medium, "Hardware", "Nadia Benali")
}
