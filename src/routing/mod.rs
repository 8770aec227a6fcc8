//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation path
//!     → navigator.rs (host: cache, current location)
//!     → router.rs (route lookup, first match wins)
//!     → matcher.rs (evaluate path conditions)
//!     → page.rs (lazy loader → page handle)
//!
//! Route Compilation (at startup):
//!     routes.rs declares entries
//!     → builder checks paths, names and the catch-all
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - A catch-all is mandatory, so resolution always succeeds

pub mod matcher;
pub mod navigator;
pub mod page;
pub mod router;
pub mod routes;

pub use navigator::{Navigation, NavigationError, Navigator};
pub use page::{lazy, Page, PageError, PageLoader};
pub use router::{RouteEntry, RouteError, RouteMatch, RouteName, RouteTable};
pub use routes::{app_routes, links};
