//! Provider-specific types and error definitions.

use thiserror::Error;

// Re-export ProviderConfig from config module to avoid duplication
pub use crate::config::schema::ProviderConfig;

/// Identity of a constructed provider handle.
///
/// Ids are unique for the lifetime of the process, so two handles built
/// from the same URL still compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u64);

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "provider-{}", self.0)
    }
}

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur while creating or using a provider handle.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Endpoint URL missing or rejected by the client library.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
