//! Page handles and lazy loaders.
//!
//! A route points at a [`PageLoader`], a factory that produces the page on
//! demand. Loading is asynchronous so a loader may do real work (fetch
//! assets, warm caches) before the page exists.

use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::context::AppContext;

/// Errors raised while loading or rendering a page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The loader could not produce the page.
    #[error("Failed to load page: {0}")]
    Load(String),

    /// The page needed the provider and it failed.
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

/// A mounted page.
pub trait Page: Send + Sync + std::fmt::Debug {
    /// Title shown by the host.
    fn title(&self) -> &str;

    /// Render the page as text. `params` holds path segments captured by
    /// the route (empty for fixed paths).
    fn render<'a>(
        &'a self,
        ctx: &'a AppContext,
        params: &'a [String],
    ) -> BoxFuture<'a, Result<String, PageError>>;
}

/// Asynchronous factory for a page.
pub type PageLoader =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn Page>, PageError>> + Send + Sync>;

/// Loader that constructs `P` with [`Default`] when first awaited.
pub fn lazy<P>() -> PageLoader
where
    P: Page + Default + 'static,
{
    Arc::new(|| {
        async {
            let page: Arc<dyn Page> = Arc::new(P::default());
            Ok::<_, PageError>(page)
        }
        .boxed()
    })
}
