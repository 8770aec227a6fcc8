//! Route matching logic.
//!
//! # Responsibilities
//! - Match a navigation path against a fixed route path
//! - Match any path for the catch-all route
//! - Strip query strings and fragments before matching
//!
//! # Design Decisions
//! - Case-insensitive by default, case-sensitive on request
//! - One trailing slash is tolerated unless matching is strict
//! - No regex: fixed paths compare as strings

use crate::config::RouterConfig;

/// Trait for matching navigation paths.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this route.
    fn matches(&self, path: &str) -> bool;

    /// Path segments captured by the match.
    fn params(&self, _path: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Drop everything from the first `?` or `#`.
pub fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Matches one fixed path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    pattern: String,
    case_sensitive: bool,
    strict: bool,
}

impl ExactPathMatcher {
    /// Create a new exact path matcher.
    pub fn new(pattern: impl Into<String>, options: &RouterConfig) -> Self {
        let mut pattern = pattern.into();
        if !options.strict && pattern != "/" && pattern.ends_with('/') {
            pattern.pop();
        }
        let pattern = if options.case_sensitive {
            pattern
        } else {
            pattern.to_lowercase()
        };
        Self {
            pattern,
            case_sensitive: options.case_sensitive,
            strict: options.strict,
        }
    }

    fn normalize<'a>(&self, path: &'a str) -> &'a str {
        let path = strip_query_and_fragment(path);
        if path.is_empty() {
            return "/";
        }
        if self.strict || path == "/" {
            return path;
        }
        path.strip_suffix('/').unwrap_or(path)
    }
}

impl PathMatcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        let path = self.normalize(path);
        if self.case_sensitive {
            path == self.pattern
        } else {
            path.to_lowercase() == self.pattern
        }
    }
}

/// Matches every path and captures its segments.
#[derive(Debug, Clone, Default)]
pub struct CatchAllMatcher;

impl PathMatcher for CatchAllMatcher {
    fn matches(&self, _path: &str) -> bool {
        true
    }

    fn params(&self, path: &str) -> Vec<String> {
        strip_query_and_fragment(path)
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }
}
