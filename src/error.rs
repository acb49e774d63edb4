//! Error types for the gateway.
//!
//! # Design Decisions
//! - Startup errors (bad targets, bad headers) are separate from runtime
//!   transport failures
//! - Transport failures never reach the client as-is; the handler converts
//!   them to the fixed fallback response and logs the detail

use std::time::Duration;
use thiserror::Error;

/// Errors raised while constructing the gateway from configuration.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid upstream target `{target}`: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("invalid injected header `{name}`")]
    InvalidHeader { name: String },
}

/// Network-level failure while forwarding a request upstream.
///
/// Distinct from an HTTP error status returned by the upstream, which is a
/// successful proxy operation and passes through unmodified.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),
}
