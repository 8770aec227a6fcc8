//! Route lookup.
//!
//! # Responsibilities
//! - Store the declared routes and the catch-all
//! - Resolve a path to the first matching route
//! - Look routes up by name
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order; first match wins
//! - The catch-all is held apart from the other routes, so it is always
//!   evaluated last and resolution never fails

use std::collections::HashSet;
use std::str::FromStr;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::config::RouterConfig;
use crate::observability::metrics;
use crate::routing::matcher::{CatchAllMatcher, ExactPathMatcher, PathMatcher};
use crate::routing::page::{Page, PageError, PageLoader};

/// Path pattern of the catch-all route.
pub const CATCH_ALL_PATTERN: &str = "/:catchAll(.*)*";

/// Symbolic names of the named routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Transactions,
}

impl RouteName {
    pub const ALL: [RouteName; 2] = [RouteName::Home, RouteName::Transactions];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "HomePage",
            RouteName::Transactions => "TransactionsPage",
        }
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RouteError::UnknownName(s.to_string()))
    }
}

/// Errors raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("Route path '{0}' is declared more than once")]
    DuplicatePath(String),

    #[error("Route name '{0}' is declared more than once")]
    DuplicateName(RouteName),

    #[error("Route table has no catch-all route")]
    MissingCatchAll,

    #[error("Unknown route name '{0}'")]
    UnknownName(String),
}

/// One route: a path, an optional name and a page loader.
pub struct RouteEntry {
    path: String,
    name: Option<RouteName>,
    matcher: Box<dyn PathMatcher>,
    loader: PageLoader,
}

impl RouteEntry {
    /// Declared path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Route name; `None` for the catch-all.
    pub fn name(&self) -> Option<RouteName> {
        self.name
    }

    /// The catch-all is the only route without a name.
    pub fn is_catch_all(&self) -> bool {
        self.name.is_none()
    }

    /// The route's page factory.
    pub fn loader(&self) -> PageLoader {
        self.loader.clone()
    }

    /// Invoke the loader.
    pub fn load(&self) -> BoxFuture<'static, Result<std::sync::Arc<dyn Page>, PageError>> {
        (self.loader)()
    }

    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        self.name
            .map(|n| n.as_str())
            .unwrap_or(metrics::CATCH_ALL_LABEL)
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish()
    }
}

/// Result of resolving a path.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    /// Segments captured by the catch-all; empty otherwise.
    pub params: Vec<String>,
}

impl RouteMatch<'_> {
    pub fn name(&self) -> Option<RouteName> {
        self.entry.name()
    }

    pub fn loader(&self) -> PageLoader {
        self.entry.loader()
    }

    pub fn is_catch_all(&self) -> bool {
        self.entry.is_catch_all()
    }
}

/// Ordered route table with a mandatory catch-all.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    catch_all: RouteEntry,
}

impl RouteTable {
    pub fn builder(options: RouterConfig) -> RouteTableBuilder {
        RouteTableBuilder {
            options,
            routes: Vec::new(),
            catch_all: None,
        }
    }

    /// Find the first route matching `path`.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        let entry = self
            .routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .unwrap_or(&self.catch_all);

        let params = entry.matcher.params(path);
        tracing::trace!(path, route = entry.label(), "Route resolved");
        metrics::record_route_resolved(entry.label());

        RouteMatch { entry, params }
    }

    /// Look a route up by name.
    pub fn find_by_name(&self, name: RouteName) -> Option<&RouteEntry> {
        self.routes.iter().find(|route| route.name == Some(name))
    }

    /// Declared routes in evaluation order, catch-all last.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().chain(std::iter::once(&self.catch_all))
    }

    /// Number of routes including the catch-all.
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Collects routes and checks them on [`RouteTableBuilder::build`].
pub struct RouteTableBuilder {
    options: RouterConfig,
    routes: Vec<(String, RouteName, PageLoader)>,
    catch_all: Option<PageLoader>,
}

impl RouteTableBuilder {
    /// Add a named route. Routes are evaluated in the order added.
    pub fn route(mut self, path: impl Into<String>, name: RouteName, loader: PageLoader) -> Self {
        self.routes.push((path.into(), name, loader));
        self
    }

    /// Set the catch-all loader.
    pub fn catch_all(mut self, loader: PageLoader) -> Self {
        self.catch_all = Some(loader);
        self
    }

    pub fn build(mut self) -> Result<RouteTable, RouteError> {
        let mut seen_paths = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut routes = Vec::with_capacity(self.routes.len());

        for (path, name, loader) in std::mem::take(&mut self.routes) {
            if !path.starts_with('/') {
                return Err(RouteError::InvalidPath(path));
            }
            if !seen_paths.insert(self.path_key(&path)) {
                return Err(RouteError::DuplicatePath(path));
            }
            if !seen_names.insert(name) {
                return Err(RouteError::DuplicateName(name));
            }

            routes.push(RouteEntry {
                matcher: Box::new(ExactPathMatcher::new(path.clone(), &self.options)),
                path,
                name: Some(name),
                loader,
            });
        }

        let loader = self.catch_all.ok_or(RouteError::MissingCatchAll)?;
        let catch_all = RouteEntry {
            path: CATCH_ALL_PATTERN.to_string(),
            name: None,
            matcher: Box::new(CatchAllMatcher),
            loader,
        };

        Ok(RouteTable { routes, catch_all })
    }

    fn path_key(&self, path: &str) -> String {
        let path = if self.options.strict || path == "/" {
            path
        } else {
            path.strip_suffix('/').unwrap_or(path)
        };
        if self.options.case_sensitive {
            path.to_string()
        } else {
            path.to_lowercase()
        }
    }
}
