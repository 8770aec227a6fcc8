//! Provider handle: a connected JSON-RPC client for one HTTP endpoint.
//!
//! # Responsibilities
//! - Build an alloy HTTP provider from an endpoint URL
//! - Give every handle a process-unique identity
//! - Query chain state (chain id, block number, latest transactions)
//! - Bound every RPC call by the configured timeout
//!
//! Construction does not touch the network; the connection is made lazily
//! by the first request.

use std::future::IntoFuture;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::B256;
use alloy::providers::{Provider, ProviderBuilder};
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId, HandleId};
use crate::observability::metrics;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// A connected blockchain client handle.
#[derive(Clone)]
pub struct ProviderHandle {
    id: HandleId,
    endpoint: Url,
    provider: Arc<dyn Provider + Send + Sync>,
    timeout_duration: Duration,
}

impl ProviderHandle {
    /// Build a handle for an HTTP JSON-RPC endpoint.
    ///
    /// Fails with [`BlockchainError::Configuration`] when the URL can't be
    /// parsed. Nothing else about the endpoint is checked.
    pub fn connect_http(endpoint: &str, rpc_timeout_secs: u64) -> BlockchainResult<Self> {
        let url: Url = endpoint.parse().map_err(|e| {
            BlockchainError::Configuration(format!("Invalid HTTP provider URL '{}': {}", endpoint, e))
        })?;

        let provider = Arc::new(ProviderBuilder::new().connect_http(url.clone()))
            as Arc<dyn Provider + Send + Sync>;
        let id = HandleId(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed));

        tracing::debug!(handle = %id, endpoint = %url, "Provider handle constructed");

        Ok(Self {
            id,
            endpoint: url,
            provider,
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        })
    }

    /// Identity of this handle.
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Endpoint this handle talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the chain ID from the RPC.
    pub async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.call("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn block_number(&self) -> BlockchainResult<u64> {
        self.call("eth_blockNumber", self.provider.get_block_number())
            .await
    }

    /// Hashes of at most `limit` transactions in the latest block.
    pub async fn latest_transaction_hashes(&self, limit: usize) -> BlockchainResult<Vec<B256>> {
        let block = self
            .call(
                "eth_getBlockByNumber",
                self.provider.get_block_by_number(BlockNumberOrTag::Latest),
            )
            .await?
            .ok_or_else(|| BlockchainError::Rpc("Latest block not available".to_string()))?;

        Ok(block.transactions.hashes().take(limit).collect())
    }

    /// Check if the endpoint is reachable.
    ///
    /// Returns true if we can query the block number.
    pub async fn is_healthy(&self) -> bool {
        let healthy = self.block_number().await.is_ok();
        metrics::record_provider_health(healthy);
        healthy
    }

    async fn call<F, T, E>(&self, method: &'static str, request: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, request).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(handle = %self.id, method, error = %e, "RPC error");
                Err(BlockchainError::Rpc(format!("{} failed: {}", method, e)))
            }
            Err(_) => {
                tracing::warn!(handle = %self.id, method, "RPC timeout");
                Err(BlockchainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("id", &self.id)
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
