//! Request extractors with this API's error shape.
//!
//! Each wraps the matching axum extractor and routes its rejection through
//! [`AppError`], so malformed bodies, query strings and path segments get
//! the same `{ "error", "code" }` JSON as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` whose rejections (bad syntax, missing fields, wrong
/// content type) become 400 `BAD_REQUEST` responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query`; an undecodable query string is a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// `axum::extract::Path`; a segment of the wrong type (e.g. `/detail/abc`)
/// is a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);
