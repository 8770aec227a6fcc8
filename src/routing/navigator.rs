//! Minimal navigation host.
//!
//! # Responsibilities
//! - Resolve a path (or route name) through the route table
//! - Invoke the route's loader on first visit and cache the page
//! - Track the current location
//!
//! # Design Decisions
//! - Pages are cached per route path, so a loader runs at most once per
//!   navigator when visits are sequential
//! - No guards, history stack or cancellation

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use dashmap::DashMap;
use thiserror::Error;

use crate::observability::metrics;
use crate::routing::page::{Page, PageError};
use crate::routing::router::{RouteEntry, RouteName, RouteTable};

/// Errors raised while navigating.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No route named '{0}'")]
    UnknownRoute(RouteName),

    #[error("Loading route '{route}' failed: {source}")]
    Load {
        route: &'static str,
        #[source]
        source: PageError,
    },
}

/// A completed navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Path as requested.
    pub path: String,
    /// Name of the matched route; `None` for the catch-all.
    pub route: Option<RouteName>,
    /// Segments captured by the route.
    pub params: Vec<String>,
    pub page: Arc<dyn Page>,
}

/// Resolves paths and mounts pages.
#[derive(Debug)]
pub struct Navigator {
    routes: Arc<RouteTable>,
    cache: DashMap<String, Arc<dyn Page>>,
    current: ArcSwapOption<Navigation>,
}

impl Navigator {
    pub fn new(routes: Arc<RouteTable>) -> Self {
        Self {
            routes,
            cache: DashMap::new(),
            current: ArcSwapOption::empty(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Navigate to `path`.
    pub async fn navigate(&self, path: &str) -> Result<Arc<Navigation>, NavigationError> {
        let matched = self.routes.resolve(path);
        let page = self.mount(matched.entry).await?;

        Ok(self.commit(Navigation {
            path: path.to_string(),
            route: matched.name(),
            params: matched.params,
            page,
        }))
    }

    /// Navigate to a named route.
    pub async fn navigate_named(&self, name: RouteName) -> Result<Arc<Navigation>, NavigationError> {
        let entry = self
            .routes
            .find_by_name(name)
            .ok_or(NavigationError::UnknownRoute(name))?;
        let page = self.mount(entry).await?;

        Ok(self.commit(Navigation {
            path: entry.path().to_string(),
            route: Some(name),
            params: Vec::new(),
            page,
        }))
    }

    /// The last successful navigation.
    pub fn current(&self) -> Option<Arc<Navigation>> {
        self.current.load_full()
    }

    /// Number of pages loaded so far.
    pub fn loaded_pages(&self) -> usize {
        self.cache.len()
    }

    async fn mount(&self, entry: &RouteEntry) -> Result<Arc<dyn Page>, NavigationError> {
        if let Some(page) = self.cache.get(entry.path()) {
            return Ok(Arc::clone(page.value()));
        }

        let page = entry.load().await.map_err(|source| NavigationError::Load {
            route: entry.label(),
            source,
        })?;
        metrics::record_page_loaded(entry.label());
        tracing::debug!(route = entry.label(), title = page.title(), "Page loaded");

        // Keep whichever page landed first if another visit raced us.
        let page = self
            .cache
            .entry(entry.path().to_string())
            .or_insert(page)
            .value()
            .clone();
        Ok(page)
    }

    fn commit(&self, navigation: Navigation) -> Arc<Navigation> {
        tracing::info!(
            path = %navigation.path,
            route = navigation.route.map(|r| r.as_str()).unwrap_or(metrics::CATCH_ALL_LABEL),
            "Navigated"
        );
        let navigation = Arc::new(navigation);
        self.current.store(Some(Arc::clone(&navigation)));
        navigation
    }
}
