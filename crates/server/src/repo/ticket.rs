use shared_types::{AppError, CreateTicketRequest, Ticket};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a new ticket for the given owner. New tickets always start as 'new'.
pub async fn create(
    pool: &Pool<Postgres>,
    user_id: i64,
    req: CreateTicketRequest,
) -> Result<Ticket, AppError> {
    sqlx::query_as::<_, Ticket>(
        r#"
        INSERT INTO tickets (user_id, product, description)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, product, status, description, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&req.product)
    .bind(&req.description)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a ticket by id, scoped to its owner. A ticket belonging to another
/// user reads as absent.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    user_id: i64,
    id: Uuid,
) -> Result<Option<Ticket>, AppError> {
    sqlx::query_as::<_, Ticket>(
        r#"
        SELECT id, user_id, product, status, description, created_at, updated_at
        FROM tickets
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// List all tickets belonging to a user, newest first.
pub async fn list_by_user(pool: &Pool<Postgres>, user_id: i64) -> Result<Vec<Ticket>, AppError> {
    sqlx::query_as::<_, Ticket>(
        r#"
        SELECT id, user_id, product, status, description, created_at, updated_at
        FROM tickets
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Update a ticket's status. Returns None when the ticket does not exist
/// for this owner.
pub async fn set_status(
    pool: &Pool<Postgres>,
    user_id: i64,
    id: Uuid,
    status: &str,
) -> Result<Option<Ticket>, AppError> {
    sqlx::query_as::<_, Ticket>(
        r#"
        UPDATE tickets
        SET status = $3, updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, product, status, description, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(status)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Delete a ticket and (via cascade) its notes. Returns true if a row was deleted.
pub async fn delete(pool: &Pool<Postgres>, user_id: i64, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM tickets WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
