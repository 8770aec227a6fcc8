//! Application context handed to pages.
//!
//! Replaces process-wide state: whoever builds the context owns the
//! provider store's lifetime, and tests get a fresh one each time.

use std::sync::Arc;

use crate::blockchain::ProviderStore;
use crate::config::AppConfig;

/// Shared state for one running shell.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    provider: Arc<ProviderStore>,
}

impl AppContext {
    /// Build a context with an empty provider store.
    pub fn new(config: AppConfig) -> Self {
        let provider = Arc::new(ProviderStore::new(config.provider.clone()));
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn provider(&self) -> &ProviderStore {
        &self.provider
    }
}
