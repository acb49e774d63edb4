//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all handler)
//!     → routing layer decides rule + rewritten path
//!     → request.rs (build outbound request, inject headers)
//!     → upstream client forwards with deadline
//!     → response.rs (CORS normalization, error fallback)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{InjectedHeaders, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
