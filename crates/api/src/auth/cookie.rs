//! The HttpOnly cookie that carries the session token to browsers.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Build the session cookie for a freshly issued token.
pub fn session_cookie(token: String, max_age_mins: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::minutes(max_age_mins))
        .build()
}

/// A cookie that, once set, removes the session cookie from the browser.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
