//! Explorer application shell.
//!
//! Route table with lazily loaded pages, an injectable provider store for
//! the blockchain client handle, and display helpers.

pub mod blockchain;
pub mod config;
pub mod context;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod utils;

pub use blockchain::{ProviderHandle, ProviderStore};
pub use config::AppConfig;
pub use context::AppContext;
pub use routing::{Navigator, RouteTable};
pub use utils::hash_shortener;
