pub mod actors;
pub mod admin;
pub mod auth;
pub mod awards;
pub mod catalog;
pub mod countries;
pub mod genres;
pub mod health;
pub mod reviews;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Catalog, admin and account routes sit at the API root; reference
/// entities and moderation are nested by resource:
///
/// ```text
/// /genres      /countries    /actors
/// /awards      /reviews      /users
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(admin::router())
        .merge(auth::router())
        .nest("/genres", genres::router())
        .nest("/countries", countries::router())
        .nest("/actors", actors::router())
        .nest("/awards", awards::router())
        .nest("/reviews", reviews::router())
        .nest("/users", users::router())
}
