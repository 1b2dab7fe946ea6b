//! Top-movers slice.

use super::{trigger, FailureCopy, FetchHandle};
use crate::client::CoinwatchClient;
use crate::domain::coin::Coin;
use crate::error::FetchError;
use crate::state::{Action, SliceKey, SlicePartition};

use std::sync::Arc;

pub const TOP_MOVERS_COPY: FailureCopy = FailureCopy {
    status: "Failed to fetch top movers.",
    prefix: "Failed to fetch top movers",
};

/// Sub-client for the `topmovers` partition.
pub struct TopMovers<'a> {
    pub(crate) client: &'a CoinwatchClient,
}

impl<'a> TopMovers<'a> {
    pub async fn trigger(&self) -> FetchHandle<Coin> {
        let gateway = self.client.top_movers.clone();
        trigger(
            &self.client.store,
            SliceKey::TopMovers,
            self.client.next_request_id(),
            Action::TopMovers,
            TOP_MOVERS_COPY,
            async move { gateway.fetch().await },
        )
        .await
    }

    pub async fn fetch(&self) -> Result<Vec<Coin>, FetchError> {
        self.trigger().await.await
    }

    #[cfg(feature = "http")]
    pub async fn spawn(&self) -> tokio::task::JoinHandle<Result<Vec<Coin>, FetchError>> {
        tokio::spawn(self.trigger().await)
    }

    pub async fn state(&self) -> Arc<SlicePartition<Coin>> {
        self.client.store.snapshot().await.topmovers.clone()
    }
}
