//! Page handles mounted by the router.
//!
//! Pages are deliberately thin: they read the provider store through the
//! application context and format what they show with the hash shortener.

mod home;
mod not_found;
mod transactions;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use transactions::TransactionsPage;
