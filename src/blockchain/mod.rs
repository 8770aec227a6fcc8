//! Blockchain provider subsystem.
//!
//! # Data Flow
//! ```text
//! ProviderConfig (HTTP URL from file or HTTP_PROVIDER)
//!     → store.rs (create_instance / get_or_create)
//!     → client.rs (alloy HTTP provider, lazy connection)
//!     → pages read the current handle via AppContext
//! ```
//!
//! # Constraints
//! - At most one current handle per store
//! - Handles are replaced, never torn down by the store
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod store;
pub mod types;

pub use client::ProviderHandle;
pub use store::ProviderStore;
pub use types::{BlockchainError, BlockchainResult, ChainId, HandleId, ProviderConfig};
