use axum::{
    Form, Router,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::{Cookie, SameSite};
use jiff::Timestamp;
use secrecy::ExposeSecret;
use serde::Deserialize;
use types::{AccountStatus, Error, Identity, Result, SESSION_COOKIE_NAME, encode_session};

use crate::{CONFIG, storage::STORE};

pub fn router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    email: String,
    password: String,
}

// The login/logout redirects carry short codes; the login view maps them to
// the user-visible notifications.
async fn login(Form(form): Form<LoginForm>) -> Response {
    match authenticate(&form.email, &form.password).await {
        Ok(identity) => {
            tracing::info!(email = %identity.email, role = %identity.role, "login succeeded");

            let Ok(value) = encode_session(&identity) else {
                return Redirect::to(&login_url_with_error("session_error")).into_response();
            };

            with_cookie(
                Redirect::to("/?welcome=1").into_response(),
                session_cookie(value),
            )
        }
        Err(_) => {
            tracing::info!(email = %form.email, "login failed");
            Redirect::to(&login_url_with_error("invalid_credentials")).into_response()
        }
    }
}

async fn logout() -> Response {
    tracing::info!("logout");

    with_cookie(
        Redirect::to("/login?notice=logged_out").into_response(),
        clear_session_cookie(),
    )
}

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// An expired cookie: removing it destroys the durable identity record.
fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build()
}

/// Mock credential check: the email must belong to an active directory user
/// and the password is compared in plaintext against the configured demo
/// password. Invalid credentials is the only failure kind.
async fn authenticate(email: &str, password: &str) -> Result<Identity> {
    let user = STORE
        .find_user_by_email(email)
        .await?
        .ok_or(Error::AuthenticationFailure)?;

    if user.status == AccountStatus::Inactive
        || password != CONFIG.demo_password.expose_secret()
    {
        return Err(Error::AuthenticationFailure);
    }

    Ok(Identity {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
        society: user.society,
        building: user.building,
        floor: user.floor,
        flat: user.flat,
        phone: user.phone,
        avatar: user.avatar,
        status: user.status,
        last_login: Some(Timestamp::now()),
    })
}

fn with_cookie(mut response: Response, cookie: Cookie<'_>) -> Response {
    if let Ok(value) = cookie.to_string().parse() {
        response
            .headers_mut()
            .insert(axum::http::header::SET_COOKIE, value);
    }
    response
}

fn login_url_with_error(code: &str) -> String {
    format!("/login?error={code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Role;

    #[tokio::test]
    async fn demo_admin_login_succeeds() {
        let identity = authenticate("admin@innovativelabs.com", "password123")
            .await
            .unwrap();
        assert_eq!(identity.role, Role::SuperAdmin);
        assert_eq!(identity.email, "admin@innovativelabs.com");
        assert!(identity.last_login.is_some());
    }

    #[tokio::test]
    async fn wrong_password_is_an_authentication_failure() {
        let error = authenticate("admin@innovativelabs.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(error, Error::AuthenticationFailure);
    }

    #[tokio::test]
    async fn unknown_email_is_an_authentication_failure() {
        let error = authenticate("nobody@example.com", "password123")
            .await
            .unwrap_err();
        assert_eq!(error, Error::AuthenticationFailure);
    }

    #[tokio::test]
    async fn session_cookie_round_trips_the_identity() {
        let identity = authenticate("secretary@innovativelabs.com", "password123")
            .await
            .unwrap();
        let cookie = session_cookie(encode_session(&identity).unwrap());

        assert_eq!(cookie.name(), types::SESSION_COOKIE_NAME);
        let decoded = types::decode_session(cookie.value()).unwrap();
        assert_eq!(decoded, identity);
    }

    #[test]
    fn logout_cookie_expires_the_durable_record() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.name(), types::SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
    }

    #[test]
    fn failed_logins_redirect_back_to_the_login_form() {
        let url = login_url_with_error("invalid_credentials");
        assert_eq!(url, "/login?error=invalid_credentials");
    }
}
