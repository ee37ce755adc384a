use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use types::{Error, Identity, Result, Role, SESSION_COOKIE_NAME, decode_session};

/// Extract the current identity from the request cookie.
pub async fn get_session_from_cookie() -> Result<Identity> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|_| Error::load("request headers unavailable"))?;

    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::AuthenticationFailure)?;

    for cookie_str in cookie_header.split(';') {
        let cookie_str = cookie_str.trim();
        if let Some(value) = cookie_str.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) {
            return decode_session(value);
        }
    }

    Err(Error::AuthenticationFailure)
}

/// Require an authenticated session, returning the identity if present.
pub async fn require_session() -> Result<Identity> {
    get_session_from_cookie().await
}

/// Require a session whose role passes `allowed` (one of the `Role::can_*`
/// capability predicates).
pub async fn require_capability(allowed: fn(&Role) -> bool) -> Result<Identity> {
    let identity = get_session_from_cookie().await?;

    if !allowed(&identity.role) {
        return Err(Error::load(format!(
            "access denied: role '{}' may not perform this action",
            identity.role
        )));
    }

    Ok(identity)
}
