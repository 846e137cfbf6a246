use shared_types::{AppError, Note};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a new note on a ticket. The text is stored exactly as submitted.
pub async fn create(
    pool: &Pool<Postgres>,
    ticket_id: Uuid,
    user_id: i64,
    text: &str,
    is_staff: bool,
) -> Result<Note, AppError> {
    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (ticket_id, user_id, text, is_staff)
        VALUES ($1, $2, $3, $4)
        RETURNING id, ticket_id, user_id, text, is_staff, created_at
        "#,
    )
    .bind(ticket_id)
    .bind(user_id)
    .bind(text)
    .bind(is_staff)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// List all notes for a ticket, oldest first. The client renders this order
/// verbatim and does not re-sort.
pub async fn list_by_ticket(
    pool: &Pool<Postgres>,
    ticket_id: Uuid,
) -> Result<Vec<Note>, AppError> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, ticket_id, user_id, text, is_staff, created_at
        FROM notes
        WHERE ticket_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(ticket_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
