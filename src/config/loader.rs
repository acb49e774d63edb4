//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{GatewayConfig, UPSTREAM_ORIGIN_ENV};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file if present, otherwise use defaults.
///
/// The upstream origin environment variable is applied after the file is
/// read, so it wins over both the default and the configured value.
pub fn load_or_default(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        GatewayConfig::default()
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply process-environment overrides to a loaded configuration.
pub fn apply_env_overrides(config: &mut GatewayConfig) {
    apply_origin_override(config, std::env::var(UPSTREAM_ORIGIN_ENV).ok());
}

fn apply_origin_override(config: &mut GatewayConfig, origin: Option<String>) {
    if let Some(origin) = origin {
        if !origin.is_empty() {
            config.upstream.origin = origin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_validated_defaults() {
        let config = load_or_default(Path::new("/nonexistent/gateway.toml")).unwrap();
        assert_eq!(config.rules[0].prefix, "/vite");
    }

    #[test]
    fn origin_override_replaces_the_configured_value() {
        let mut config = GatewayConfig::default();
        apply_origin_override(&mut config, Some("https://staging.example.com".into()));
        assert_eq!(config.upstream.origin, "https://staging.example.com");
    }

    #[test]
    fn empty_or_absent_override_keeps_the_default() {
        let mut config = GatewayConfig::default();
        let default_origin = config.upstream.origin.clone();

        apply_origin_override(&mut config, Some(String::new()));
        assert_eq!(config.upstream.origin, default_origin);

        apply_origin_override(&mut config, None);
        assert_eq!(config.upstream.origin, default_origin);
    }

    #[test]
    fn parses_full_toml_document() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:5173"

            [upstream]
            origin = "http://127.0.0.1:8080"

            [[rules]]
            prefix = "/vite"

            [[rules]]
            prefix = "/legacy"
            target = "http://127.0.0.1:9090"

            [[injected_headers]]
            name = "x-api-client"
            value = "h5"

            [timeouts]
            connect_secs = 2
            request_secs = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[1].target.as_deref(), Some("http://127.0.0.1:9090"));
        assert_eq!(config.injected_headers.len(), 1);
        assert_eq!(config.timeouts.request_secs, 4);
    }
}
