//! Route definitions for account and session endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Account routes, mounted at the API root.
///
/// ```text
/// POST /register                  create an unconfirmed account
/// GET  /confirm-email/{token}     confirm the email address
/// POST /login                     issue a session token + cookie
/// POST /logout                    clear the session cookie
/// POST /forgot-password           mail a reset link
/// POST /reset-password/{token}    set a new password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/confirm-email/{token}", get(auth::confirm_email))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/reset-password/{token}", post(auth::reset_password))
}
