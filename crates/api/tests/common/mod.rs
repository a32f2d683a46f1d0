#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use cinedex_api::auth::jwt::{generate_access_token, JwtConfig};
use cinedex_api::auth::password::hash_password;
use cinedex_api::config::ServerConfig;
use cinedex_api::notifications::MemoryMailer;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;
use cinedex_core::status::MovieStatus;
use cinedex_core::types::DbId;
use cinedex_db::models::drama::DramaInput;
use cinedex_db::models::user::{CreateUser, User};
use cinedex_db::repositories::{DramaRepo, MovieRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-42";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        public_base_url: "http://localhost:3001".to_string(),
        cookie_secure: false,
        jwt: JwtConfig {
            secret: "integration-test-secret-with-enough-length".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// The production router over `pool`, with mail captured in memory.
pub fn build_test_app_with_mailer(pool: PgPool) -> (Router, Arc<MemoryMailer>) {
    let config = test_config();
    let mailer = Arc::new(MemoryMailer::default());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: mailer.clone(),
    };
    (build_app_router(state, &config), mailer)
}

pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_mailer(pool).0
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a confirmed, active user with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
        profile_picture: None,
        email_confirmed: true,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// A session token for `user`, signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt).unwrap()
}

pub async fn admin_token(pool: &PgPool) -> String {
    token_for(&create_user(pool, "admin", "admin").await)
}

pub async fn user_token(pool: &PgPool) -> String {
    token_for(&create_user(pool, "viewer", "user").await)
}

/// Write a movie through the composite writer and publish it.
pub async fn published_movie(pool: &PgPool, body: serde_json::Value) -> DbId {
    let input: DramaInput = serde_json::from_value(body).unwrap();
    let outcome = DramaRepo::create(pool, &input).await.unwrap();
    MovieRepo::set_status(pool, outcome.movie_id, MovieStatus::Published)
        .await
        .unwrap();
    outcome.movie_id
}
