//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → compiled into RuleSet/InjectedHeaders at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the gateway runs with no config file
//! - The upstream origin env var wins over file and default values
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::GatewayConfig;
pub use schema::HeaderEntry;
pub use schema::RuleConfig;
