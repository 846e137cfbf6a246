// Server-only auth helpers shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::AuthUser;

use crate::db::get_db;
use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by the auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse the access token from cookies / Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Like `require_auth`, but returns None instead of an error when the
/// request carries no usable credentials. Used by `get_current_user`.
pub(crate) fn optional_auth() -> Option<crate::auth::jwt::Claims> {
    require_auth().ok()
}

/// Fetch the full AuthUser for a validated user id. Returns None and clears
/// stale cookies when the user no longer exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await;
    let user = crate::repo::user::find_by_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    match user {
        Some(u) => Ok(Some(AuthUser::from(u))),
        None => {
            crate::auth::cookies::schedule_clear_cookies();
            tracing::warn!(user_id, "Auth token references non-existent user, clearing cookies");
            Ok(None)
        }
    }
}
