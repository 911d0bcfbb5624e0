//! Path matchers used by route bindings.
//!
//! Matching is case-sensitive and never looks at the query string.

/// Trait for matching a request path against a binding.
pub trait RouteMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct ExactPath {
    path: String,
}

impl ExactPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RouteMatcher for ExactPath {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches every path starting with a prefix.
#[derive(Debug, Clone)]
pub struct PathPrefix {
    prefix: String,
}

impl PathPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl RouteMatcher for PathPrefix {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}
