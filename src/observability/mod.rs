//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway pipeline produces:
//!     → hooks.rs (request / response / error records)
//!     → logging.rs (tracing subscriber, structured events)
//!
//! Consumers:
//!     → stdout during local development
//!     → test doubles capturing hook invocations
//! ```
//!
//! # Design Decisions
//! - Hooks are injected, so tests can assert on records without log scraping
//! - Request ID flows through all log events via the request-ID layer

pub mod hooks;
pub mod logging;

pub use hooks::{GatewayHooks, TracingHooks};
