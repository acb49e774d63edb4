//! Response transformation and the fixed error fallback.
//!
//! # Responsibilities
//! - Normalize CORS headers on upstream responses before relaying
//! - Synthesize the fixed fallback response for transport failures
//!
//! # Design Decisions
//! - `Access-Control-Allow-Origin` is always rewritten to `*`, and added
//!   when the upstream omitted it entirely
//! - Everything else (status, headers, body) passes through untouched;
//!   bodies are streamed, never buffered
//! - The fallback shape is fixed: transport error detail is logged, never
//!   sent to the client

use axum::body::Body;
use axum::http::header::{self, HeaderValue};
use axum::http::{HeaderMap, Response, StatusCode};

/// Body of the fixed transport-failure response.
pub const PROXY_ERROR_BODY: &str = "Proxy error occurred.";

/// Rewrite `Access-Control-Allow-Origin` to the wildcard value.
///
/// Removes every existing occurrence first so exactly one wildcard header
/// leaves the gateway.
pub fn normalize_cors(headers: &mut HeaderMap) {
    headers.remove(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
}

/// The fixed response returned for any forwarding failure.
pub fn proxy_error_response() -> Response<Body> {
    let mut response = Response::new(Body::from(PROXY_ERROR_BODY));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}
