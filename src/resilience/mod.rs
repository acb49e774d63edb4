//! Resilience subsystem.
//!
//! One attempt per request: the gateway enforces a forward deadline and
//! nothing else. Retries and backoff are deliberately absent; a transport
//! failure is terminal for the request that hit it.

pub mod timeouts;
