//! The application's route table.

use crate::config::RouterConfig;
use crate::pages::{HomePage, NotFoundPage, TransactionsPage};
use crate::routing::page::lazy;
use crate::routing::router::{RouteError, RouteName, RouteTable};

/// Route paths.
pub mod links {
    pub const HOME_PAGE: &str = "/";
    pub const TRANSACTIONS_PAGE: &str = "/transactions";
    pub use crate::routing::router::CATCH_ALL_PATTERN as CATCH_ALL;
}

/// Build the application routes: home, transactions, then the
/// not-found catch-all.
pub fn app_routes(options: RouterConfig) -> Result<RouteTable, RouteError> {
    RouteTable::builder(options)
        .route(links::HOME_PAGE, RouteName::Home, lazy::<HomePage>())
        .route(
            links::TRANSACTIONS_PAGE,
            RouteName::Transactions,
            lazy::<TransactionsPage>(),
        )
        .catch_all(lazy::<NotFoundPage>())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_build() {
        let table = app_routes(RouterConfig::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.find_by_name(RouteName::Transactions).map(|e| e.path()),
            Some(links::TRANSACTIONS_PAGE)
        );
        assert!(table.entries().last().unwrap().is_catch_all());
    }
}
