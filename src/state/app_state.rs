//! Aggregated application state.

use super::action::{Action, SliceKey};
use super::partition::{Phase, SlicePartition};
use crate::domain::coin::Coin;
use crate::domain::news::NewsItem;
use std::sync::Arc;

/// Immutable snapshot of every partition.
///
/// Partitions sit behind `Arc`s: reducing an action rebuilds only the
/// partition it targets and shares the rest with the previous snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub news: Arc<SlicePartition<NewsItem>>,
    pub topmovers: Arc<SlicePartition<Coin>>,
    pub watchlist: Arc<SlicePartition<Coin>>,
}

/// Type-erased `{phase, loading, error, len}` of one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionStatus {
    pub slice: SliceKey,
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<String>,
    pub len: usize,
}

impl AppState {
    /// Pure reducer: the next snapshot after `action`.
    pub fn reduce(&self, action: &Action) -> AppState {
        let mut next = self.clone();
        match action {
            Action::News(event) => next.news = Arc::new(self.news.apply(event)),
            Action::TopMovers(event) => next.topmovers = Arc::new(self.topmovers.apply(event)),
            Action::Watchlist(event) => next.watchlist = Arc::new(self.watchlist.apply(event)),
            Action::ReorderWatchlist(order) => {
                next.watchlist = Arc::new(self.watchlist.replace_data(order.clone()))
            }
        }
        next
    }

    pub fn status(&self, slice: SliceKey) -> PartitionStatus {
        fn of<T: Clone>(slice: SliceKey, p: &SlicePartition<T>) -> PartitionStatus {
            PartitionStatus {
                slice,
                phase: p.phase(),
                loading: p.loading(),
                error: p.error().map(str::to_string),
                len: p.data().len(),
            }
        }
        match slice {
            SliceKey::News => of(slice, &self.news),
            SliceKey::TopMovers => of(slice, &self.topmovers),
            SliceKey::Watchlist => of(slice, &self.watchlist),
        }
    }

    /// Status of every partition, in slice order.
    pub fn statuses(&self) -> Vec<PartitionStatus> {
        SliceKey::ALL.iter().map(|k| self.status(*k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::partition::{Lifecycle, RequestId};

    #[test]
    fn test_reduce_shares_untouched_partitions() {
        let s0 = AppState::default();
        let s1 = s0.reduce(&Action::Watchlist(Lifecycle::Pending {
            request_id: RequestId(1),
        }));

        assert!(Arc::ptr_eq(&s0.news, &s1.news));
        assert!(Arc::ptr_eq(&s0.topmovers, &s1.topmovers));
        assert!(!Arc::ptr_eq(&s0.watchlist, &s1.watchlist));
        assert!(s1.watchlist.loading());
        assert!(!s0.watchlist.loading());
    }

    #[test]
    fn test_statuses_in_order() {
        let s = AppState::default().reduce(&Action::News(Lifecycle::Rejected {
            request_id: RequestId(1),
            error: Some(crate::error::FetchError::new("Failed to fetch news.")),
        }));
        let statuses = s.statuses();
        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].slice, SliceKey::News);
        assert_eq!(statuses[0].error.as_deref(), Some("Failed to fetch news."));
        assert_eq!(statuses[2].phase, Phase::Idle);
    }
}
