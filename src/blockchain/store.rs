//! Provider store: the single provider handle shared by pages.
//!
//! # Responsibilities
//! - Hold at most one current provider handle
//! - Create handles from the configured HTTP endpoint
//! - Hand out the current handle without creating one
//!
//! # Design Decisions
//! - Owned by `AppContext` and passed explicitly, never a hidden global
//! - `create_instance` always replaces; the previous handle is released,
//!   not torn down (callers still holding it keep a working client)
//! - `get_or_create` installs a handle only when none is present
//! - Lock-free via `ArcSwapOption`; last writer wins on `create_instance`

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::blockchain::client::ProviderHandle;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ProviderConfig};
use crate::observability::metrics;

/// Store for the application's provider handle.
pub struct ProviderStore {
    config: ProviderConfig,
    current: ArcSwapOption<ProviderHandle>,
}

impl ProviderStore {
    /// Create an empty store. No handle exists until one is requested.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            current: ArcSwapOption::empty(),
        }
    }

    /// The current handle, if one has been created.
    pub fn get_current(&self) -> Option<Arc<ProviderHandle>> {
        self.current.load_full()
    }

    /// Build a new handle from the configured endpoint and make it current.
    ///
    /// Any previous handle is replaced. Calling this twice yields two
    /// distinct handles and only the second is retained.
    pub fn create_instance(&self) -> BlockchainResult<Arc<ProviderHandle>> {
        let handle = Arc::new(self.connect()?);

        if let Some(previous) = self.current.swap(Some(Arc::clone(&handle))) {
            tracing::warn!(
                previous = %previous.id(),
                current = %handle.id(),
                "Replaced existing provider handle"
            );
            metrics::record_provider_replaced();
        } else {
            tracing::info!(
                handle = %handle.id(),
                endpoint = %handle.endpoint(),
                "Provider handle created"
            );
        }

        Ok(handle)
    }

    /// Return the current handle, creating one if the store is empty.
    ///
    /// When callers race, the first handle installed wins and the others
    /// are discarded.
    pub fn get_or_create(&self) -> BlockchainResult<Arc<ProviderHandle>> {
        if let Some(handle) = self.get_current() {
            return Ok(handle);
        }

        let fresh = Arc::new(self.connect()?);
        Ok(self.install_if_empty(fresh))
    }

    /// Make `fresh` current unless a handle is already installed, and
    /// return whichever handle ends up current.
    fn install_if_empty(&self, fresh: Arc<ProviderHandle>) -> Arc<ProviderHandle> {
        let previous = self.current.rcu(|current| match current {
            Some(existing) => Some(Arc::clone(existing)),
            None => Some(Arc::clone(&fresh)),
        });

        match previous {
            Some(existing) => {
                tracing::debug!(
                    kept = %existing.id(),
                    discarded = %fresh.id(),
                    "Provider handle already installed"
                );
                existing
            }
            None => {
                tracing::info!(
                    handle = %fresh.id(),
                    endpoint = %fresh.endpoint(),
                    "Provider handle created on first access"
                );
                fresh
            }
        }
    }

    fn connect(&self) -> BlockchainResult<ProviderHandle> {
        let url = self.config.http_url.as_deref().ok_or_else(|| {
            BlockchainError::Configuration(format!(
                "HTTP provider URL is not set (set {} or provider.http_url)",
                self.config.env_var
            ))
        })?;

        let handle = ProviderHandle::connect_http(url, self.config.rpc_timeout_secs)?;
        metrics::record_provider_created();
        Ok(handle)
    }
}

impl std::fmt::Debug for ProviderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderStore")
            .field("http_url", &self.config.http_url)
            .field("current", &self.get_current().map(|h| h.id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            http_url: Some("http://localhost:8545".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = ProviderStore::new(test_config());
        assert!(store.get_current().is_none());
    }

    #[test]
    fn test_create_then_get() {
        let store = ProviderStore::new(test_config());
        let created = store.create_instance().unwrap();
        let current = store.get_current().unwrap();
        assert!(Arc::ptr_eq(&created, &current));
    }

    #[test]
    fn test_create_twice_replaces() {
        let store = ProviderStore::new(test_config());
        let first = store.create_instance().unwrap();
        let second = store.create_instance().unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(store.get_current().unwrap().id(), second.id());
    }

    #[test]
    fn test_get_or_create_reuses() {
        let store = ProviderStore::new(test_config());
        let a = store.get_or_create().unwrap();
        let b = store.get_or_create().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_racing_install_keeps_first() {
        let store = ProviderStore::new(test_config());
        // Another caller installs its handle after ours was built.
        let ours = Arc::new(store.connect().unwrap());
        let theirs = store.create_instance().unwrap();

        let winner = store.install_if_empty(Arc::clone(&ours));
        assert!(Arc::ptr_eq(&winner, &theirs));
        assert_eq!(store.get_current().unwrap().id(), theirs.id());
        assert_ne!(winner.id(), ours.id());
    }

    #[test]
    fn test_install_into_empty_store() {
        let store = ProviderStore::new(test_config());
        let ours = Arc::new(store.connect().unwrap());

        let winner = store.install_if_empty(Arc::clone(&ours));
        assert!(Arc::ptr_eq(&winner, &ours));
        assert!(Arc::ptr_eq(&store.get_current().unwrap(), &ours));
    }

    #[test]
    fn test_missing_url() {
        let store = ProviderStore::new(ProviderConfig::default());
        let err = store.create_instance().unwrap_err();
        assert!(matches!(err, BlockchainError::Configuration(_)));
        assert!(err.to_string().contains("HTTP_PROVIDER"));
        assert!(store.get_current().is_none());
    }

    #[test]
    fn test_malformed_url_keeps_previous() {
        let store = ProviderStore::new(test_config());
        let first = store.create_instance().unwrap();

        let broken = ProviderStore {
            config: ProviderConfig {
                http_url: Some("::::".to_string()),
                ..ProviderConfig::default()
            },
            current: ArcSwapOption::new(Some(Arc::clone(&first))),
        };
        assert!(matches!(
            broken.create_instance(),
            Err(BlockchainError::Configuration(_))
        ));
        assert_eq!(broken.get_current().unwrap().id(), first.id());
    }
}
