use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const DESK_ACCESS: &str = "desk_access";
pub const DESK_REFRESH: &str = "desk_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

/// Build a Set-Cookie header value for the access token.
pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> HeaderValue {
    let cookie = Cookie::build((DESK_ACCESS, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_minutes * 60))
        .secure(cookie_secure())
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("cookie header value should be valid")
}

/// Build a Set-Cookie header value for the refresh token.
pub fn build_refresh_cookie(token: &str, max_age_days: i64) -> HeaderValue {
    let cookie = Cookie::build((DESK_REFRESH, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_days * 86400))
        .secure(cookie_secure())
        .build();

    HeaderValue::from_str(&cookie.to_string()).expect("cookie header value should be valid")
}

/// Build Set-Cookie headers that clear both auth cookies.
pub fn build_clear_cookies() -> (HeaderValue, HeaderValue) {
    let access = Cookie::build((DESK_ACCESS, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    let refresh = Cookie::build((DESK_REFRESH, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    (
        HeaderValue::from_str(&access.to_string()).expect("clear cookie should be valid"),
        HeaderValue::from_str(&refresh.to_string()).expect("clear cookie should be valid"),
    )
}

/// Set both access and refresh cookies on the response using current JWT expiry config.
pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    headers.append(
        header::SET_COOKIE,
        build_access_cookie(access_token, jwt::access_token_expiry_minutes()),
    );
    headers.append(
        header::SET_COOKIE,
        build_refresh_cookie(refresh_token, jwt::refresh_token_expiry_days()),
    );
}

/// Clear both auth cookies on the response.
pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    let (access, refresh) = build_clear_cookies();
    headers.append(header::SET_COOKIE, access);
    headers.append(header::SET_COOKIE, refresh);
}

/// Extract the access token from cookies (preferred) or Bearer header (fallback).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, DESK_ACCESS) {
        return Some(token);
    }

    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// Extract the refresh token from cookies.
pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, DESK_REFRESH)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Pending cookie action to be applied by the auth middleware after the
/// handler runs. Stored in request extensions as `Arc<Mutex<..>>` so server
/// functions can populate it.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule auth cookies to be set by the middleware.
/// Called from server functions — reads the CookieSlot from FullstackContext extensions.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Set {
                access_token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
            });
        }
    }
}

/// Schedule auth cookies to be cleared by the middleware.
pub fn schedule_clear_cookies() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            *slot.0.lock().unwrap() = Some(PendingCookieAction::Clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_access_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("desk_access=abc123; other=ignored"),
        );
        assert_eq!(extract_access_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn extract_access_token_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer xyz789"),
        );
        assert_eq!(extract_access_token(&headers).as_deref(), Some("xyz789"));
    }

    #[test]
    fn cookie_takes_precedence_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("desk_access=from-cookie"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(
            extract_access_token(&headers).as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn missing_token_is_none() {
        let headers = HeaderMap::new();
        assert!(extract_access_token(&headers).is_none());
        assert!(extract_refresh_token(&headers).is_none());
    }

    #[test]
    fn access_cookie_is_http_only() {
        let value = build_access_cookie("tok", 15);
        let s = value.to_str().unwrap();
        assert!(s.contains("desk_access=tok"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("SameSite=Lax"));
    }

    #[test]
    fn clear_cookies_have_zero_max_age() {
        let (access, refresh) = build_clear_cookies();
        assert!(access.to_str().unwrap().contains("Max-Age=0"));
        assert!(refresh.to_str().unwrap().contains("Max-Age=0"));
    }
}
