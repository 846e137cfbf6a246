use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped comment attached to a ticket, as stored in Postgres.
/// Notes only accumulate; the UI never edits or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Note {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub user_id: i64,
    pub text: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

/// API response shape for a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: String,
    pub ticket_id: String,
    pub text: String,
    pub is_staff: bool,
    pub created_at: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id.to_string(),
            ticket_id: n.ticket_id.to_string(),
            text: n.text,
            is_staff: n.is_staff,
            created_at: n.created_at.to_rfc3339(),
        }
    }
}

/// Request body for adding a note to a ticket.
///
/// The note text is submitted exactly as buffered in the view — empty and
/// whitespace-only notes are deliberately not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub note_text: String,
    pub ticket_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_note_request_serde_shape() {
        let req = CreateNoteRequest {
            note_text: "customer called back".to_string(),
            ticket_id: "T1".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"note_text":"customer called back","ticket_id":"T1"}"#
        );
        let parsed: CreateNoteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn empty_note_text_is_representable() {
        // The view submits the buffer as-is; the type must not reject it.
        let req = CreateNoteRequest {
            note_text: "".to_string(),
            ticket_id: "T1".to_string(),
        };
        let parsed: CreateNoteRequest =
            serde_json::from_str(&serde_json::to_string(&req).unwrap()).unwrap();
        assert_eq!(parsed.note_text, "");
    }

    #[test]
    fn note_list_order_survives_serde() {
        // The notes list renders in the order the server returns; make sure
        // nothing in the wire format reorders it.
        let make = |id: &str| NoteResponse {
            id: id.to_string(),
            ticket_id: "t".to_string(),
            text: id.to_string(),
            is_staff: false,
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
        };
        let notes = vec![make("c"), make("a"), make("b")];
        let json = serde_json::to_string(&notes).unwrap();
        let parsed: Vec<NoteResponse> = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = parsed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
