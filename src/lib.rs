//! Local Development Proxy Gateway
//!
//! An HTTP gateway that sits between a front-end dev server and a remote
//! API origin. Requests under a reserved path prefix (default `/vite`) are
//! intercepted, the prefix is stripped, fixed API headers are injected, and
//! the request is forwarded to the configured upstream. Responses come back
//! with `Access-Control-Allow-Origin` forced to `*`. Any transport failure
//! is absorbed into a fixed `500 text/plain` fallback.
//!
//! ```text
//!                         ┌───────────────────────────────────────────┐
//!                         │               PROXY GATEWAY               │
//!                         │                                           │
//!   Client request        │  ┌────────┐   ┌─────────┐   ┌──────────┐  │
//!   ──────────────────────┼─▶│  http  │──▶│ routing │──▶│ request  │──┼──▶ Upstream
//!                         │  │ server │   │ ruleset │   │transform │  │    origin
//!                         │  └────────┘   └─────────┘   └──────────┘  │
//!                         │                                           │
//!   Client response       │  ┌──────────┐   ┌──────────────────────┐  │
//!   ◀─────────────────────┼──│ response │◀──│ deadline + fallback  │◀─┼─── Upstream
//!                         │  │transform │   │     (resilience)     │  │    response
//!                         │  └──────────┘   └──────────────────────┘  │
//!                         │                                           │
//!                         │  config · observability · lifecycle      │
//!                         └───────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::GatewayConfig;
pub use error::{GatewayError, TransportFailure};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
