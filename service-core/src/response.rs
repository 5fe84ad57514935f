//! JSON response helpers shared by every handler.
//!
//! Both helpers set `Content-Type: application/json; charset=utf-8`. Error
//! bodies are always `{"message": "..."}` produced by a real JSON encoder, so
//! quotes and control characters in the message are escaped.

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// Build an error response with a `{"message": ...}` envelope.
pub fn error_response(message: &str, status: StatusCode) -> Response {
    // Serializing a struct with a single &str field cannot fail.
    let body = serde_json::to_vec(&ErrorBody { message }).unwrap_or_default();
    json_response(body, status)
}

/// Write already-encoded JSON bytes verbatim. The caller guarantees the bytes
/// are valid JSON.
pub fn json_response(bytes: impl Into<Body>, status: StatusCode) -> Response {
    let body: Body = bytes.into();
    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}
