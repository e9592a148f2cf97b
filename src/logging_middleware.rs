// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode
//!
//! Password and token fields are redacted before anything is written.
//! Every request is tagged with an `x-request-id`, taken from the client
//! when present and echoed back on the response.

use axum::body::to_bytes;
use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::common::helpers::redact_secrets;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Bodies larger than this are refused rather than buffered
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Middleware to log request and response bodies in debug mode
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    if let Some(body) = render_body(&bytes) {
        debug!(
            request_id = %request_id,
            method = %parts.method,
            uri = %parts.uri,
            request_body = %body,
            "📥 Request"
        );
    }

    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (mut parts, body) = response.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body) = render_body(&bytes) {
        debug!(
            request_id = %request_id,
            status = %parts.status,
            response_body = %body,
            "📤 Response"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Pretty JSON with secrets redacted, raw UTF-8 otherwise; `None` when empty
fn render_body(bytes: &Bytes) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    let body_str = std::str::from_utf8(bytes).ok()?;

    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(mut json) => {
            redact_secrets(&mut json);
            Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| body_str.to_string()))
        }
        Err(_) => Some(body_str.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_body_redacts_passwords() {
        let bytes = Bytes::from_static(br#"{"username":"alice","password":"hunter22"}"#);
        let rendered = render_body(&bytes).expect("non-empty body");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn test_render_body_plain_text_and_empty() {
        assert_eq!(
            render_body(&Bytes::from_static(b"plain")),
            Some("plain".to_string())
        );
        assert_eq!(render_body(&Bytes::new()), None);
    }
}
