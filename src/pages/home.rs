//! Home page: shows the endpoint of the provider handle, creating it on
//! first visit.

use futures_util::future::{BoxFuture, FutureExt};

use crate::context::AppContext;
use crate::routing::page::{Page, PageError};

/// Landing page. Creates the provider handle on first visit.
#[derive(Debug, Default)]
pub struct HomePage;

impl Page for HomePage {
    fn title(&self) -> &str {
        "Home"
    }

    fn render<'a>(
        &'a self,
        ctx: &'a AppContext,
        _params: &'a [String],
    ) -> BoxFuture<'a, Result<String, PageError>> {
        async move {
            let handle = ctx.provider().get_or_create()?;
            Ok(format!(
                "{}\nConnected to {} ({})",
                self.title(),
                handle.endpoint(),
                handle.id()
            ))
        }
        .boxed()
    }
}
