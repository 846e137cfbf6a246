use dioxus::prelude::*;
use shared_types::TicketResponse;

// ── Ticket Server Functions ────────────────────────────

/// Fetch a single ticket belonging to the calling user.
#[server]
pub async fn get_ticket(id: String) -> Result<TicketResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::ticket;
    use shared_types::AppError;
    use uuid::Uuid;

    let claims = crate::api::auth::require_auth()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid ticket id").into_server_fn_error())?;

    let db = get_db().await;
    let row = ticket::find_by_id(db, claims.sub, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Ticket not found").into_server_fn_error())?;

    Ok(TicketResponse::from(row))
}

/// List the calling user's tickets, newest first.
#[server]
pub async fn list_tickets() -> Result<Vec<TicketResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::ticket;

    let claims = crate::api::auth::require_auth()?;

    let db = get_db().await;
    let rows = ticket::list_by_user(db, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(rows.into_iter().map(TicketResponse::from).collect())
}

/// Open a new ticket for the calling user.
#[server]
pub async fn create_ticket(
    product: String,
    description: String,
) -> Result<TicketResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use crate::repo::ticket;
    use shared_types::{AppError, CreateTicketRequest};

    let claims = crate::api::auth::require_auth()?;

    let req = CreateTicketRequest {
        product,
        description,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    if !shared_types::is_valid_product(&req.product) {
        return Err(AppError::bad_request("Unknown product").into_server_fn_error());
    }

    let db = get_db().await;
    let row = ticket::create(db, claims.sub, req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(user_id = claims.sub, ticket_id = %row.id, "Ticket created");
    Ok(TicketResponse::from(row))
}

/// Move a ticket to 'closed'. A closed ticket stays closed.
#[server]
pub async fn close_ticket(id: String) -> Result<TicketResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::ticket;
    use shared_types::{AppError, TicketStatus};
    use uuid::Uuid;

    let claims = crate::api::auth::require_auth()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid ticket id").into_server_fn_error())?;

    let db = get_db().await;
    let row = ticket::set_status(db, claims.sub, uuid, TicketStatus::Closed.as_str())
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Ticket not found").into_server_fn_error())?;

    tracing::info!(user_id = claims.sub, ticket_id = %row.id, "Ticket closed");
    Ok(TicketResponse::from(row))
}

/// Delete a ticket and all of its notes.
#[server]
pub async fn delete_ticket(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::ticket;
    use shared_types::AppError;
    use uuid::Uuid;

    let claims = crate::api::auth::require_auth()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid ticket id").into_server_fn_error())?;

    let db = get_db().await;
    let deleted = ticket::delete(db, claims.sub, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if !deleted {
        return Err(AppError::not_found("Ticket not found").into_server_fn_error());
    }

    tracing::info!(user_id = claims.sub, ticket_id = %uuid, "Ticket deleted");
    Ok(())
}
