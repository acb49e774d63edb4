//! Request transformation and request-ID middleware.
//!
//! # Responsibilities
//! - Build the outbound request sent to the upstream target
//! - Replace authority and Host header (change-origin semantics)
//! - Apply injected headers, overwriting client-supplied values
//! - Generate a unique request ID for log correlation
//!
//! # Design Decisions
//! - The inbound request is never mutated; a transformed copy is forwarded
//! - Injected headers are applied last so they always win
//! - The body and all other client headers pass through unchanged

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::header::{HeaderName, HeaderValue, HOST};
use axum::http::request::Parts;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, Request, Uri};
use tower::{Layer, Service};
use uuid::Uuid;

use crate::config::HeaderEntry;
use crate::error::GatewayError;
use crate::routing::ProxyRule;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Headers injected into every proxied request, in configuration order.
#[derive(Debug, Clone)]
pub struct InjectedHeaders {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl InjectedHeaders {
    /// Parse configured header entries into typed name/value pairs.
    pub fn from_config(entries: &[HeaderEntry]) -> Result<Self, GatewayError> {
        let entries = entries
            .iter()
            .map(|entry| {
                let name = entry.name.parse::<HeaderName>().map_err(|_| {
                    GatewayError::InvalidHeader {
                        name: entry.name.clone(),
                    }
                })?;
                let value = HeaderValue::from_str(&entry.value).map_err(|_| {
                    GatewayError::InvalidHeader {
                        name: entry.name.clone(),
                    }
                })?;
                Ok((name, value))
            })
            .collect::<Result<Vec<_>, GatewayError>>()?;

        Ok(Self { entries })
    }

    /// Apply all entries to a header map, overwriting same-named headers.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.entries {
            headers.insert(name.clone(), value.clone());
        }
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no headers are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the outbound request for a matched rule.
///
/// The inbound parts are read-only; headers are copied into the new request,
/// the Host header is replaced with the upstream authority, and injected
/// headers are applied on top. The query string is preserved as-is.
pub fn build_upstream_request(
    parts: &Parts,
    body: Body,
    rule: &ProxyRule,
    rewritten_path: &str,
    injected: &InjectedHeaders,
) -> Result<Request<Body>, axum::http::Error> {
    let path_and_query = match parts.uri.query() {
        Some(query) => format!("{rewritten_path}?{query}"),
        None => rewritten_path.to_string(),
    };
    let uri = Uri::builder()
        .scheme(rule.scheme.clone())
        .authority(rule.authority.clone())
        .path_and_query(PathAndQuery::try_from(path_and_query.as_str())?)
        .build()?;

    let mut request = Request::builder()
        .method(parts.method.clone())
        .uri(uri)
        .body(body)?;

    let headers = request.headers_mut();
    for name in parts.headers.keys() {
        if name == HOST {
            continue;
        }
        // Append every value so multi-valued headers survive the copy.
        for value in parts.headers.get_all(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers.insert(HOST, HeaderValue::from_str(rule.authority.as_str())?);
    injected.apply(headers);

    Ok(request)
}

/// Layer that stamps requests with an `x-request-id` header.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service wrapper adding the request ID when absent.
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}
