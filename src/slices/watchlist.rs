//! Watchlist slice: the user's coins, refreshable and drag-reorderable.

use super::{trigger, FailureCopy, FetchHandle};
use crate::client::CoinwatchClient;
use crate::domain::coin::Coin;
use crate::error::FetchError;
use crate::shared::Ticker;
use crate::state::{Action, AppState, SliceKey, SlicePartition};

use std::sync::Arc;

pub const WATCHLIST_COPY: FailureCopy = FailureCopy {
    status: "Failed to fetch coin prices.",
    prefix: "Failed to fetch prices",
};

/// Sub-client for the `watchlist` partition.
pub struct Watchlist<'a> {
    pub(crate) client: &'a CoinwatchClient,
}

impl<'a> Watchlist<'a> {
    /// Start a quote fetch for the configured tickers.
    pub async fn trigger(&self) -> FetchHandle<Coin> {
        let gateway = self.client.quotes.clone();
        let tickers = self.client.watchlist_tickers.clone();
        trigger(
            &self.client.store,
            SliceKey::Watchlist,
            self.client.next_request_id(),
            Action::Watchlist,
            WATCHLIST_COPY,
            async move { gateway.fetch(&tickers).await },
        )
        .await
    }

    /// Trigger and wait for the outcome.
    pub async fn fetch(&self) -> Result<Vec<Coin>, FetchError> {
        self.trigger().await.await
    }

    /// Trigger and await the outcome on a tokio task.
    #[cfg(feature = "http")]
    pub async fn spawn(&self) -> tokio::task::JoinHandle<Result<Vec<Coin>, FetchError>> {
        tokio::spawn(self.trigger().await)
    }

    /// Replace the watchlist contents with `order`, verbatim.
    pub async fn reorder(&self, order: Vec<Coin>) -> Arc<AppState> {
        self.client
            .store
            .dispatch(Action::ReorderWatchlist(order))
            .await
    }

    pub async fn state(&self) -> Arc<SlicePartition<Coin>> {
        self.client.store.snapshot().await.watchlist.clone()
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.client.watchlist_tickers
    }
}
