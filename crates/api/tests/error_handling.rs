//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cinedex_api::error::AppError;
use cinedex_core::error::CoreError;
use cinedex_db::models::genre::GenreInput;
use http_body_util::BodyExt;
use validator::Validate;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id 42 not found");
}

#[tokio::test]
async fn unknown_name_returns_400() {
    let err = AppError::Core(CoreError::UnknownName {
        entity: "Country",
        name: "Atlantis".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNKNOWN_REFERENCE");
    assert_eq!(json["error"], "Country 'Atlantis' does not exist");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Invalid yearRange format".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid yearRange format");
}

#[tokio::test]
async fn validator_errors_use_field_messages() {
    let errors = GenreInput {
        name: String::new(),
    }
    .validate()
    .unwrap_err();

    let (status, json) = error_to_response(AppError::from(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Genre name is required");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn auth_errors_return_401_and_403() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("Account Suspended".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Account Suspended");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret stack trace".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Internal("db password".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_and_not_found_messages_pass_through() {
    let (status, json) = error_to_response(AppError::BadRequest("bad field".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad field");

    let (status, json) =
        error_to_response(AppError::NotFound("No reviews found for movie 3".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "No reviews found for movie 3");
}
