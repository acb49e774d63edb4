//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so the gateway runs with no config file at all.

use serde::{Deserialize, Serialize};

/// Default upstream origin when neither config nor environment supplies one.
pub const DEFAULT_UPSTREAM_ORIGIN: &str = "https://www.mf8ezm.com";

/// Environment variable overriding the upstream origin at startup.
pub const UPSTREAM_ORIGIN_ENV: &str = "VITE_API_TARGET";

/// Root configuration for the proxy gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream origin used by rules without an explicit target.
    pub upstream: UpstreamConfig,

    /// Proxy rules mapping path prefixes to upstream targets.
    pub rules: Vec<RuleConfig>,

    /// Headers injected into every proxied request.
    pub injected_headers: Vec<HeaderEntry>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            upstream: UpstreamConfig::default(),
            rules: vec![RuleConfig::default()],
            injected_headers: HeaderEntry::api_defaults(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:5173").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5173".to_string(),
        }
    }
}

/// Upstream origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Origin (scheme + authority) requests are forwarded to.
    pub origin: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_UPSTREAM_ORIGIN.to_string(),
        }
    }
}

/// A proxy rule: requests whose path starts with `prefix` (on a segment
/// boundary) are forwarded to `target` with the prefix stripped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleConfig {
    /// Path prefix to intercept.
    pub prefix: String,

    /// Upstream origin for this rule. Falls back to `upstream.origin`.
    #[serde(default)]
    pub target: Option<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            prefix: "/vite".to_string(),
            target: None,
        }
    }
}

/// A single injected header.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// The fixed API headers sent on every proxied request.
    pub fn api_defaults() -> Vec<Self> {
        vec![
            Self::new("x-api-client", "h5"),
            Self::new("x-api-site", "4002"),
            Self::new("x-api-version", "1.0.0"),
            Self::new("x-api-type", "h5"),
        ]
    }
}

/// Timeout configuration for forwarding.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total forward deadline (request + response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level directive (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_vite_rule_and_api_headers() {
        let config = GatewayConfig::default();

        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].prefix, "/vite");
        assert!(config.rules[0].target.is_none());
        assert_eq!(config.upstream.origin, DEFAULT_UPSTREAM_ORIGIN);

        let names: Vec<&str> = config
            .injected_headers
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["x-api-client", "x-api-site", "x-api-version", "x-api-type"]
        );
        assert_eq!(config.injected_headers[0].value, "h5");
        assert_eq!(config.injected_headers[1].value, "4002");
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.timeouts.request_secs, 10);
        assert_eq!(config.rules[0].prefix, "/vite");
    }
}
