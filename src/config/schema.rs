//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Environment variable that supplies the HTTP provider endpoint.
pub const DEFAULT_PROVIDER_ENV_VAR: &str = "HTTP_PROVIDER";

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Blockchain provider settings.
    pub provider: ProviderConfig,

    /// Route matching behaviour.
    pub router: RouterConfig,

    /// Display formatting used by pages.
    pub display: DisplayConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Blockchain provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// HTTP JSON-RPC endpoint URL. Absent until configured.
    pub http_url: Option<String>,

    /// Name of the environment variable that overrides `http_url`.
    pub env_var: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            http_url: None,
            env_var: DEFAULT_PROVIDER_ENV_VAR.to_string(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Route matching configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Match path letters case-sensitively.
    pub case_sensitive: bool,

    /// Reject a trailing slash that the route pattern doesn't have.
    pub strict: bool,
}

/// Display formatting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Total number of hash characters kept when shortening.
    pub hash_length: usize,

    /// Maximum number of transactions listed on the transactions page.
    pub max_transactions: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hash_length: 10,
            max_transactions: 20,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.provider.http_url.is_none());
        assert_eq!(config.provider.env_var, "HTTP_PROVIDER");
        assert_eq!(config.provider.rpc_timeout_secs, 10);
        assert!(!config.router.case_sensitive);
        assert!(!config.router.strict);
        assert_eq!(config.display.hash_length, 10);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [provider]
            http_url = "http://localhost:8545"

            [router]
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(config.provider.http_url.as_deref(), Some("http://localhost:8545"));
        assert_eq!(config.provider.rpc_timeout_secs, 10);
        assert!(config.router.strict);
        assert_eq!(config.observability.log_level, "info");
    }
}
