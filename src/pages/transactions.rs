//! Transactions page.
//!
//! Reads the latest block through the provider handle and lists its
//! transaction hashes, shortened for display.

use futures_util::future::{BoxFuture, FutureExt};

use crate::context::AppContext;
use crate::routing::page::{Page, PageError};
use crate::utils::hash_shortener;

/// Lists the latest block's transactions with shortened hashes.
#[derive(Debug, Default)]
pub struct TransactionsPage;

impl Page for TransactionsPage {
    fn title(&self) -> &str {
        "Transactions"
    }

    fn render<'a>(
        &'a self,
        ctx: &'a AppContext,
        _params: &'a [String],
    ) -> BoxFuture<'a, Result<String, PageError>> {
        async move {
            let display = &ctx.config().display;
            let handle = ctx.provider().get_or_create()?;
            let block = handle.block_number().await?;
            let hashes = handle
                .latest_transaction_hashes(display.max_transactions)
                .await?;

            let mut out = format!("{} (block {})", self.title(), block);
            if hashes.is_empty() {
                out.push_str("\nNo transactions");
            }
            for hash in hashes {
                out.push('\n');
                out.push_str(&hash_shortener(&hash.to_string(), display.hash_length));
            }
            Ok(out)
        }
        .boxed()
    }
}
