//! News slice.

use super::{trigger, FailureCopy, FetchHandle};
use crate::client::CoinwatchClient;
use crate::domain::news::NewsItem;
use crate::error::FetchError;
use crate::state::{Action, SliceKey, SlicePartition};

use std::sync::Arc;

pub const NEWS_COPY: FailureCopy = FailureCopy {
    status: "Failed to fetch news.",
    prefix: "Failed to fetch news",
};

/// Sub-client for the `news` partition.
pub struct News<'a> {
    pub(crate) client: &'a CoinwatchClient,
}

impl<'a> News<'a> {
    pub async fn trigger(&self) -> FetchHandle<NewsItem> {
        let gateway = self.client.news.clone();
        trigger(
            &self.client.store,
            SliceKey::News,
            self.client.next_request_id(),
            Action::News,
            NEWS_COPY,
            async move { gateway.fetch().await },
        )
        .await
    }

    pub async fn fetch(&self) -> Result<Vec<NewsItem>, FetchError> {
        self.trigger().await.await
    }

    #[cfg(feature = "http")]
    pub async fn spawn(&self) -> tokio::task::JoinHandle<Result<Vec<NewsItem>, FetchError>> {
        tokio::spawn(self.trigger().await)
    }

    pub async fn state(&self) -> Arc<SlicePartition<NewsItem>> {
        self.client.store.snapshot().await.news.clone()
    }
}
