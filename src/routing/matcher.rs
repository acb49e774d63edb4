//! Path prefix matching and rewriting.
//!
//! # Responsibilities
//! - Decide whether a request path falls under a registered prefix
//! - Compute the rewritten path with the prefix removed
//!
//! # Design Decisions
//! - Prefix comparison is on whole path-segment boundaries: `/vite`
//!   matches `/vite` and `/vite/x` but never `/vitex`
//! - Matching is case-sensitive; no regex, so matching stays O(n)
//! - Stripping the full path leaves `/`, never an empty string

/// Matches a request path against a literal prefix on segment boundaries.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns true if `path` starts with the prefix on a segment boundary.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Remove the prefix from a matching path.
    ///
    /// Returns `None` when the path does not match. An empty remainder
    /// becomes `/`.
    pub fn rewrite(&self, path: &str) -> Option<String> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }
}
