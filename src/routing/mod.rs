//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (rule lookup, first match wins)
//!     → matcher.rs (segment-boundary prefix check + rewrite)
//!     → Return: RouteMatch { rule, rewritten path } or no match
//!
//! Rule compilation (at startup):
//!     RuleConfig[]
//!     → resolve targets (rule target or default origin)
//!     → parse scheme/authority once
//!     → freeze as immutable RuleSet
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - No regex in the hot path (literal prefix matching only)
//! - Deterministic: same path always matches the same rule
//! - Unmatched paths are not proxied; they are answered locally

pub mod matcher;
pub mod router;

pub use router::{ProxyRule, RouteMatch, RuleSet};
