//! HTTP-level tests for registration, login/logout and password recovery.

mod common;

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use cinedex_core::status::AccountStatus;
use cinedex_db::repositories::UserRepo;
use common::{body_json, get, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn path_of(link: &str) -> String {
    let rest = link
        .strip_prefix("http://localhost:3001")
        .expect("link should use the public base url");
    format!("/api/v1{rest}")
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_sets_cookie(pool: PgPool) {
    let user = common::create_user(&pool, "ana", "user").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/login",
        json!({"email": "ana@test.com", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["user"]["id"], user.id);
    assert_eq!(json["data"]["user"]["role"], "user");
    assert!(json["data"]["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_cookie_authenticates_requests(pool: PgPool) {
    let user = common::create_user(&pool, "ana", "user").await;
    let app = common::build_test_app(pool);
    let token = common::token_for(&user);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/add-drama")
        .header(COOKIE, format!("token={token}"))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"title": "Signal", "release_year": 2016}).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_email_are_401(pool: PgPool) {
    common::create_user(&pool, "ana", "user").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/login",
        json!({"email": "ana@test.com", "password": "not-the-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/login",
        json!({"email": "nobody@test.com", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn suspended_account_cannot_log_in(pool: PgPool) {
    let user = common::create_user(&pool, "ana", "user").await;
    UserRepo::set_account_status(&pool, user.id, AccountStatus::Suspended)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/login",
        json!({"email": "ana@test.com", "password": TEST_PASSWORD}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.headers().get(SET_COOKIE).is_none());
    let json = body_json(response).await;
    assert_eq!(json["error"], "Account Suspended");
    assert!(json.get("data").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_account_cannot_log_in(pool: PgPool) {
    let user = common::create_user(&pool, "ana", "user").await;
    UserRepo::set_account_status(&pool, user.id, AccountStatus::Deleted)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/login",
        json!({"email": "ana@test.com", "password": TEST_PASSWORD}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_expires_cookie(pool: PgPool) {
    let user = common::create_user(&pool, "ana", "user").await;
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/logout")
        .header(COOKIE, format!("token={}", common::token_for(&user)))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("Max-Age=0"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn suspension_revokes_issued_tokens(pool: PgPool) {
    let user = common::create_user(&pool, "bob", "user").await;
    let token = common::token_for(&user);
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = common::put_auth(
        app.clone(),
        &format!("/api/v1/users/suspend/{}", user.id),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::post_json_auth(
        app,
        "/api/v1/add-drama",
        json!({"title": "Signal", "release_year": 2016}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Account Suspended");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_account_token_is_401(pool: PgPool) {
    let user = common::create_user(&pool, "bob", "user").await;
    let token = common::token_for(&user);
    UserRepo::set_account_status(&pool, user.id, AccountStatus::Deleted)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = common::post_json_auth(
        app,
        "/api/v1/add-drama",
        json!({"title": "Signal", "release_year": 2016}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn demoted_admin_loses_admin_routes(pool: PgPool) {
    let moderator = common::create_user(&pool, "moderator", "admin").await;
    let token = common::token_for(&moderator);
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    common::put_json_auth(
        app.clone(),
        &format!("/api/v1/users/{}", moderator.id),
        json!({"role": "user"}),
        &admin,
    )
    .await;

    let response = get_auth(app, "/api/v1/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/dashboard", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_confirm_then_login(pool: PgPool) {
    let (app, mailer) = common::build_test_app_with_mailer(pool);
    let body = json!({"username": "mina", "email": "mina@test.com", "password": "long-enough-pw"});

    let response = post_json(app.clone(), "/api/v1/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["email_confirmed"], false);

    let login = json!({"email": "mina@test.com", "password": "long-enough-pw"});
    let response = post_json(app.clone(), "/api/v1/login", login.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let mail = mailer.last_to("mina@test.com").expect("confirmation mail");
    let link = mail.link().unwrap().to_string();
    assert!(link.contains("/confirm-email/"));

    let response = get(app.clone(), &path_of(&link)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(app, "/api/v1/login", login).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_registration_is_conflict(pool: PgPool) {
    common::create_user(&pool, "ana", "user").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/register",
        json!({"username": "ana", "email": "other@test.com", "password": "long-enough-pw"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/register",
        json!({"username": "mina", "email": "not-an-email", "password": "long-enough-pw"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/v1/register",
        json!({"username": "mina", "email": "mina@test.com", "password": "short"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bogus_confirmation_token_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/confirm-email/abc.def.ghi").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Password recovery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reset_link_works_once(pool: PgPool) {
    common::create_user(&pool, "ana", "user").await;
    let (app, mailer) = common::build_test_app_with_mailer(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/forgot-password",
        json!({"email": "ana@test.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let link = mailer.last_to("ana@test.com").unwrap().link().unwrap().to_string();
    let reset_path = path_of(&link);

    let response = post_json(
        app.clone(),
        &reset_path,
        json!({"password": "brand-new-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app.clone(),
        &reset_path,
        json!({"password": "another-new-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/v1/login",
        json!({"email": "ana@test.com", "password": "brand-new-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn forgot_password_edge_cases(pool: PgPool) {
    let suspended = common::create_user(&pool, "sam", "user").await;
    UserRepo::set_account_status(&pool, suspended.id, AccountStatus::Suspended)
        .await
        .unwrap();
    let (app, mailer) = common::build_test_app_with_mailer(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/forgot-password",
        json!({"email": "ghost@test.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        app,
        "/api/v1/forgot-password",
        json!({"email": "sam@test.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(mailer.sent().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_reset_token_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/reset-password/not-a-token",
        json!({"password": "brand-new-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
