use dioxus::prelude::*;
use shared_types::{CreateNoteRequest, NoteResponse};

// ── Note Server Functions ────────────────────────────

/// List all notes on one of the calling user's tickets, in server order.
#[server]
pub async fn list_notes(ticket_id: String) -> Result<Vec<NoteResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::{note, ticket};
    use shared_types::AppError;
    use uuid::Uuid;

    let claims = crate::api::auth::require_auth()?;

    let uuid = Uuid::parse_str(&ticket_id)
        .map_err(|_| AppError::bad_request("Invalid ticket id").into_server_fn_error())?;

    let db = get_db().await;

    // Ownership check before exposing any notes
    ticket::find_by_id(db, claims.sub, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Ticket not found").into_server_fn_error())?;

    let rows = note::list_by_ticket(db, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(rows.into_iter().map(NoteResponse::from).collect())
}

/// Add a note to one of the calling user's tickets. The note text is stored
/// exactly as submitted, including empty or whitespace-only input.
#[server]
pub async fn create_note(req: CreateNoteRequest) -> Result<NoteResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::{note, ticket, user};
    use shared_types::AppError;
    use uuid::Uuid;

    let claims = crate::api::auth::require_auth()?;

    let uuid = Uuid::parse_str(&req.ticket_id)
        .map_err(|_| AppError::bad_request("Invalid ticket id").into_server_fn_error())?;

    let db = get_db().await;

    ticket::find_by_id(db, claims.sub, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Ticket not found").into_server_fn_error())?;

    let is_staff = user::find_by_id(db, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .map(|u| u.is_staff)
        .unwrap_or(false);

    let row = note::create(db, uuid, claims.sub, &req.note_text, is_staff)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(user_id = claims.sub, ticket_id = %uuid, "Note added");
    Ok(NoteResponse::from(row))
}
