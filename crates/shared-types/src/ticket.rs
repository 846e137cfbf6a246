use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a support ticket.
///
/// Tickets open as `New`, move to `Open` when staff picks them up, and end
/// as `Closed`. A closed ticket is read-only except for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    New,
    Open,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Open => "open",
            TicketStatus::Closed => "closed",
        }
    }

    /// Parse a stored status string, falling back to `New` for anything
    /// unrecognized (mirrors how the database CHECK constraint is seeded).
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "open" => TicketStatus::Open,
            "closed" => TicketStatus::Closed,
            _ => TicketStatus::New,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TicketStatus::Closed)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A support ticket as stored in Postgres.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Ticket {
    pub id: Uuid,
    pub user_id: i64,
    pub product: String,
    /// TicketStatus stored as text ("new", "open", "closed").
    pub status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Products a ticket can be filed against.
pub const PRODUCTS: &[&str] = &["iPhone", "iPad", "MacBook Pro", "iMac"];

/// Check whether a product string is part of the supported catalogue.
pub fn is_valid_product(s: &str) -> bool {
    PRODUCTS.contains(&s)
}

/// API response shape for a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: String,
    pub product: String,
    pub status: TicketStatus,
    pub description: String,
    pub created_at: String,
}

impl From<Ticket> for TicketResponse {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id.to_string(),
            product: t.product,
            status: TicketStatus::from_str_or_default(&t.status),
            description: t.description,
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

/// Request body for opening a new ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateTicketRequest {
    pub product: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please describe your issue"))
    )]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [TicketStatus::New, TicketStatus::Open, TicketStatus::Closed] {
            assert_eq!(TicketStatus::from_str_or_default(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_new() {
        assert_eq!(TicketStatus::from_str_or_default("archived"), TicketStatus::New);
        assert_eq!(TicketStatus::from_str_or_default(""), TicketStatus::New);
    }

    #[test]
    fn only_closed_is_closed() {
        assert!(TicketStatus::Closed.is_closed());
        assert!(!TicketStatus::New.is_closed());
        assert!(!TicketStatus::Open.is_closed());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Closed).unwrap(),
            "\"closed\""
        );
        let parsed: TicketStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(parsed, TicketStatus::Open);
    }

    #[test]
    fn product_catalogue_validation() {
        assert!(is_valid_product("iPhone"));
        assert!(is_valid_product("MacBook Pro"));
        assert!(!is_valid_product("Walkman"));
    }

    #[test]
    fn ticket_response_converts_from_model() {
        let id = Uuid::new_v4();
        let ticket = Ticket {
            id,
            user_id: 7,
            product: "iPad".to_string(),
            status: "closed".to_string(),
            description: "screen cracked".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let resp = TicketResponse::from(ticket);
        assert_eq!(resp.id, id.to_string());
        assert_eq!(resp.status, TicketStatus::Closed);
        assert_eq!(resp.product, "iPad");
    }
}
