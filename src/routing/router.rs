//! Rule lookup and path rewriting.
//!
//! # Responsibilities
//! - Compile rule configs into resolved proxy rules at startup
//! - Look up the matching rule for a request path
//! - Return the matched rule and rewritten path, or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins; prefix uniqueness is enforced by validation so
//!   insertion order never changes the outcome
//! - Targets are parsed once here, not per request

use axum::http::uri::{Authority, Scheme};
use axum::http::Uri;

use crate::config::RuleConfig;
use crate::error::GatewayError;
use crate::routing::matcher::PathPrefixMatcher;

/// A compiled proxy rule: prefix plus resolved upstream origin.
#[derive(Debug, Clone)]
pub struct ProxyRule {
    pub prefix: String,
    pub scheme: Scheme,
    pub authority: Authority,
    matcher: PathPrefixMatcher,
}

impl ProxyRule {
    fn new(prefix: &str, target: &str) -> Result<Self, GatewayError> {
        let (scheme, authority) = parse_origin(target)?;
        Ok(Self {
            prefix: prefix.to_string(),
            scheme,
            authority,
            matcher: PathPrefixMatcher::new(prefix),
        })
    }
}

/// Result of a successful rule lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub rule: &'a ProxyRule,
    pub rewritten_path: String,
}

/// The immutable set of compiled proxy rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ProxyRule>,
}

impl RuleSet {
    /// Compile rule configs, resolving missing targets to `default_origin`.
    pub fn from_config(rules: &[RuleConfig], default_origin: &str) -> Result<Self, GatewayError> {
        let compiled = rules
            .iter()
            .map(|rule| {
                let target = rule.target.as_deref().unwrap_or(default_origin);
                ProxyRule::new(&rule.prefix, target)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules: compiled })
    }

    /// Find the first rule matching `path` and compute the rewritten path.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.rules.iter().find_map(|rule| {
            rule.matcher.rewrite(path).map(|rewritten_path| RouteMatch {
                rule,
                rewritten_path,
            })
        })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn parse_origin(target: &str) -> Result<(Scheme, Authority), GatewayError> {
    let uri: Uri = target.parse().map_err(|e: axum::http::uri::InvalidUri| {
        GatewayError::InvalidTarget {
            target: target.to_string(),
            reason: e.to_string(),
        }
    })?;

    let scheme = uri
        .scheme()
        .cloned()
        .ok_or_else(|| GatewayError::InvalidTarget {
            target: target.to_string(),
            reason: "missing scheme".to_string(),
        })?;
    let authority = uri
        .authority()
        .cloned()
        .ok_or_else(|| GatewayError::InvalidTarget {
            target: target.to_string(),
            reason: "missing host".to_string(),
        })?;

    Ok((scheme, authority))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(prefix: &str, target: Option<&str>) -> RuleConfig {
        RuleConfig {
            prefix: prefix.to_string(),
            target: target.map(str::to_string),
        }
    }

    #[test]
    fn compiles_default_target_from_origin() {
        let rules = RuleSet::from_config(&[rule("/vite", None)], "https://api.example.com").unwrap();

        let matched = rules.match_path("/vite/api/v1/x").unwrap();
        assert_eq!(matched.rule.authority.as_str(), "api.example.com");
        assert_eq!(matched.rule.scheme.as_str(), "https");
        assert_eq!(matched.rewritten_path, "/api/v1/x");
    }

    #[test]
    fn explicit_target_wins_over_default() {
        let rules = RuleSet::from_config(
            &[rule("/vite", Some("http://127.0.0.1:8080"))],
            "https://api.example.com",
        )
        .unwrap();

        let matched = rules.match_path("/vite").unwrap();
        assert_eq!(matched.rule.authority.as_str(), "127.0.0.1:8080");
        assert_eq!(matched.rewritten_path, "/");
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = RuleSet::from_config(
            &[
                rule("/vite/admin", Some("http://127.0.0.1:1111")),
                rule("/vite", Some("http://127.0.0.1:2222")),
            ],
            "https://api.example.com",
        )
        .unwrap();

        let matched = rules.match_path("/vite/admin/users").unwrap();
        assert_eq!(matched.rule.authority.as_str(), "127.0.0.1:1111");
        assert_eq!(matched.rewritten_path, "/users");
    }

    #[test]
    fn unmatched_path_returns_none() {
        let rules = RuleSet::from_config(&[rule("/vite", None)], "https://api.example.com").unwrap();
        assert!(rules.match_path("/assets/logo.png").is_none());
        assert!(rules.match_path("/vitex").is_none());
    }

    #[test]
    fn rejects_target_without_scheme() {
        let err = RuleSet::from_config(&[rule("/vite", Some("example.com"))], "https://x.example")
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidTarget { .. }));
    }
}
