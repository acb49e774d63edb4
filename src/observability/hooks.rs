//! Observability hooks for the proxy pipeline.
//!
//! # Responsibilities
//! - Emit one record per proxied request, response, and transport failure
//!
//! # Design Decisions
//! - Hooks are a capability the gateway calls but does not own, so the
//!   transformation logic stays deterministic and unit-testable
//! - Hook calls are synchronous and must never block or fail the request

use axum::http::{Method, StatusCode, Uri};

use crate::error::TransportFailure;

/// Callbacks invoked at the three observable points of the pipeline.
pub trait GatewayHooks: Send + Sync {
    /// Called once per proxied request, with the final (rewritten) path,
    /// before dispatch.
    fn on_request(&self, method: &Method, path: &str);

    /// Called once per upstream response, with the original request URI.
    fn on_response(&self, method: &Method, uri: &Uri, status: StatusCode);

    /// Called once per transport failure.
    fn on_error(&self, error: &TransportFailure);
}

/// Default hooks that log through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHooks;

impl GatewayHooks for TracingHooks {
    fn on_request(&self, method: &Method, path: &str) {
        tracing::info!(method = %method, path = %path, "proxy request");
    }

    fn on_response(&self, method: &Method, uri: &Uri, status: StatusCode) {
        tracing::info!(method = %method, uri = %uri, status = status.as_u16(), "proxy response");
    }

    fn on_error(&self, error: &TransportFailure) {
        tracing::error!(error = %error, "proxy error");
    }
}
