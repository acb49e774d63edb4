//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level when set
//! - Pretty format for local development; this is a dev tool

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `default_level` is used when `RUST_LOG` is not set.
pub fn init(default_level: &str) {
    let directive = format!("proxy_gateway={default_level},tower_http={default_level}");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| directive.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
