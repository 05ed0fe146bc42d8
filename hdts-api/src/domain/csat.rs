use serde::{Deserialize, Serialize};
use validator::Validate;

/// Highest rating the CSAT widget accepts
pub const CSAT_MAX_RATING: u8 = 5;

/// A customer satisfaction rating submitted against a resolved ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CsatSubmission {
    /// Public reference of the rated ticket, e.g. `TCKT-1004`
    #[validate(length(min = 1, message = "Ticket number is required"))]
    pub ticket_number: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(max = 250, message = "Comment must be at most 250 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CsatSubmission {
    pub fn new(ticket_number: impl Into<String>, rating: u8, comment: Option<String>) -> Self {
        Self {
            ticket_number: ticket_number.into(),
            rating,
            comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_inside_the_scale_pass() {
        for rating in 1..=CSAT_MAX_RATING {
            assert!(CsatSubmission::new("TCKT-1001", rating, None).validate().is_ok());
        }
    }

    #[test]
    fn zero_and_out_of_scale_ratings_fail() {
        assert!(CsatSubmission::new("TCKT-1001", 0, None).validate().is_err());
        assert!(CsatSubmission::new("TCKT-1001", 6, None).validate().is_err());
    }

    #[test]
    fn overlong_comment_fails() {
        let comment = "x".repeat(251);
        let submission = CsatSubmission::new("TCKT-1001", 4, Some(comment));
        assert!(submission.validate().is_err());

        let ok = CsatSubmission::new("TCKT-1001", 4, Some("x".repeat(250)));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn missing_ticket_number_fails() {
        assert!(CsatSubmission::new("", 4, None).validate().is_err());
    }
}
