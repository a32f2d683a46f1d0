//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Acknowledgement body for mutations that have nothing else to return.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: &'static str,
}

impl DataResponse<Ack> {
    pub fn ack(message: &'static str) -> Self {
        Self {
            data: Ack { message },
        }
    }
}
