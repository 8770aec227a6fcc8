//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides, e.g. HTTP_PROVIDER)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc through AppContext
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The provider URL is not parsed here; the client library decides

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AppConfig;
pub use schema::DisplayConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProviderConfig;
pub use schema::RouterConfig;
