use dioxus::prelude::*;
use shared_types::AuthUser;

// ── Account Server Functions ────────────────────────────

/// Create a new account and log it in. Sets auth cookies on the response.
#[server]
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use crate::repo::user;
    use shared_types::{AppError, RegisterRequest};

    let req = RegisterRequest {
        name,
        email,
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;

    let password_hash = pw::hash_password(&req.password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let created = user::create(db, &req.name, &req.email, &password_hash)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    issue_session(db, &created).await?;

    tracing::info!(user_id = created.id, "New account registered");
    Ok(AuthUser::from(created))
}

/// Authenticate with email and password. Sets auth cookies on the response.
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use crate::repo::user;
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;

    let found = user::find_by_email(db, &email)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let valid = pw::verify_password(&password, &found.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    issue_session(db, &found).await?;

    Ok(AuthUser::from(found))
}

/// Log out: revoke the presented refresh token and clear auth cookies.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};
    use crate::db::get_db;

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
            let db = get_db().await;
            let token_hash = jwt::hash_token(&refresh_token);
            let _ = sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE token_hash = $1")
                .bind(&token_hash)
                .execute(db)
                .await;
        }
    }

    crate::auth::cookies::schedule_clear_cookies();
    Ok(())
}

/// Resolve the current session, if any. Used by the client-side auth guard.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    match crate::api::auth::optional_auth() {
        Some(claims) => crate::api::auth::fetch_auth_user(claims.sub).await,
        None => Ok(None),
    }
}

/// Issue a fresh access/refresh token pair for the user, persist the refresh
/// token hash, and schedule the cookies on the response.
#[cfg(feature = "server")]
async fn issue_session(
    db: &sqlx::Pool<sqlx::Postgres>,
    user: &shared_types::User,
) -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};
    use crate::error_convert::{AppErrorExt, SqlxErrorExt};
    use shared_types::AppError;

    let access_token = jwt::create_access_token(user.id, &user.email, &user.name)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email, &user.name)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user.id)
        .bind(&refresh_hash)
        .bind(expires_at)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    cookies::schedule_auth_cookies(&access_token, &refresh_token);
    Ok(())
}
