//! Not-found page for paths that fall through to the catch-all.

use futures_util::future::{BoxFuture, FutureExt};

use crate::context::AppContext;
use crate::routing::page::{Page, PageError};

/// Shown for any path without a route.
#[derive(Debug, Default)]
pub struct NotFoundPage;

impl Page for NotFoundPage {
    fn title(&self) -> &str {
        "Not Found"
    }

    fn render<'a>(
        &'a self,
        _ctx: &'a AppContext,
        params: &'a [String],
    ) -> BoxFuture<'a, Result<String, PageError>> {
        async move { Ok(format!("404: /{} not found", params.join("/"))) }.boxed()
    }
}
