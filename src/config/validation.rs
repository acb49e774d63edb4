//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check rule prefixes are well-formed and unique
//! - Check upstream targets parse as scheme + authority
//! - Check injected headers are valid HTTP header names/values
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig -> Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::header::{HeaderName, HeaderValue};
use axum::http::Uri;
use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener bind address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("rule prefix `{0}` must start with '/'")]
    PrefixMissingSlash(String),

    #[error("rule prefix `{0}` is registered more than once")]
    DuplicatePrefix(String),

    #[error("upstream target `{target}` is invalid: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("injected header name `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),

    #[error("injected header `{0}` has an invalid value")]
    InvalidHeaderValue(String),

    #[error("timeout `{0}` must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    check_origin(&config.upstream.origin, &mut errors);

    let mut seen = HashSet::new();
    for rule in &config.rules {
        if !rule.prefix.starts_with('/') {
            errors.push(ValidationError::PrefixMissingSlash(rule.prefix.clone()));
        }
        if !seen.insert(rule.prefix.clone()) {
            errors.push(ValidationError::DuplicatePrefix(rule.prefix.clone()));
        }
        if let Some(target) = &rule.target {
            check_origin(target, &mut errors);
        }
    }

    for header in &config.injected_headers {
        if header.name.parse::<HeaderName>().is_err() {
            errors.push(ValidationError::InvalidHeaderName(header.name.clone()));
        }
        if HeaderValue::from_str(&header.value).is_err() {
            errors.push(ValidationError::InvalidHeaderValue(header.name.clone()));
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_origin(target: &str, errors: &mut Vec<ValidationError>) {
    match target.parse::<Uri>() {
        Ok(uri) => {
            let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
            if !scheme_ok || uri.authority().is_none() {
                errors.push(ValidationError::InvalidTarget {
                    target: target.to_string(),
                    reason: "expected scheme http(s) and a host".to_string(),
                });
            }
        }
        Err(e) => {
            errors.push(ValidationError::InvalidTarget {
                target: target.to_string(),
                reason: e.to_string(),
            });
        }
    }
}
