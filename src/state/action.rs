//! Actions accepted by the store.

use super::partition::{Lifecycle, RequestId};
use crate::domain::coin::Coin;
use crate::domain::news::NewsItem;
use std::fmt;

/// Names of the state partitions, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SliceKey {
    News,
    TopMovers,
    Watchlist,
}

impl SliceKey {
    pub const ALL: [SliceKey; 3] = [SliceKey::News, SliceKey::TopMovers, SliceKey::Watchlist];

    pub fn as_str(&self) -> &'static str {
        match self {
            SliceKey::News => "news",
            SliceKey::TopMovers => "topmovers",
            SliceKey::Watchlist => "watchlist",
        }
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    News(Lifecycle<NewsItem>),
    TopMovers(Lifecycle<Coin>),
    Watchlist(Lifecycle<Coin>),
    /// User finished drag-reordering the watchlist.
    ReorderWatchlist(Vec<Coin>),
}

impl Action {
    pub fn slice(&self) -> SliceKey {
        match self {
            Action::News(_) => SliceKey::News,
            Action::TopMovers(_) => SliceKey::TopMovers,
            Action::Watchlist(_) | Action::ReorderWatchlist(_) => SliceKey::Watchlist,
        }
    }

    /// Action type string, e.g. `"watchlist/fetch/pending"`.
    pub fn kind(&self) -> String {
        match self {
            Action::News(l) => format!("news/fetch/{}", l.stage()),
            Action::TopMovers(l) => format!("topmovers/fetch/{}", l.stage()),
            Action::Watchlist(l) => format!("watchlist/fetch/{}", l.stage()),
            Action::ReorderWatchlist(_) => "watchlist/reorder".to_string(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Action::News(Lifecycle::Rejected { .. })
                | Action::TopMovers(Lifecycle::Rejected { .. })
                | Action::Watchlist(Lifecycle::Rejected { .. })
        )
    }

    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            Action::News(l) => Some(l.request_id()),
            Action::TopMovers(l) | Action::Watchlist(l) => Some(l.request_id()),
            Action::ReorderWatchlist(_) => None,
        }
    }
}
