//! Memoized read views over `AppState`.
//!
//! A [`Selector`] extracts a key from the state and projects it into a view.
//! As long as the key is reference-equal to the one seen last time, the cached
//! view is returned as-is.

use super::action::SliceKey;
use super::app_state::AppState;
use super::partition::SlicePartition;
use crate::domain::coin::Coin;
use crate::domain::news::NewsItem;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Selector input compared by identity rather than by value.
pub trait MemoKey: Clone {
    fn same(&self, other: &Self) -> bool;
}

impl<T> MemoKey for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<A: MemoKey, B: MemoKey, C: MemoKey> MemoKey for (A, B, C) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1) && self.2.same(&other.2)
    }
}

pub struct Selector<K, V> {
    input: fn(&AppState) -> K,
    project: fn(&K) -> V,
    cache: Mutex<Option<(K, Arc<V>)>>,
    recomputations: AtomicUsize,
}

impl<K: MemoKey, V> Selector<K, V> {
    pub fn new(input: fn(&AppState) -> K, project: fn(&K) -> V) -> Self {
        Self {
            input,
            project,
            cache: Mutex::new(None),
            recomputations: AtomicUsize::new(0),
        }
    }

    pub fn select(&self, state: &AppState) -> Arc<V> {
        let key = (self.input)(state);
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_key, view)) = cache.as_ref() {
            if cached_key.same(&key) {
                return view.clone();
            }
        }

        self.recomputations.fetch_add(1, Ordering::Relaxed);
        let view = Arc::new((self.project)(&key));
        *cache = Some((key, view.clone()));
        view
    }

    /// How many times the projection has run.
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }
}

pub type PartitionSelector<T> = Selector<Arc<SlicePartition<T>>, SlicePartition<T>>;

pub fn news_selector() -> PartitionSelector<NewsItem> {
    Selector::new(|s| s.news.clone(), |p| (**p).clone())
}

pub fn top_movers_selector() -> PartitionSelector<Coin> {
    Selector::new(|s| s.topmovers.clone(), |p| (**p).clone())
}

pub fn watchlist_selector() -> PartitionSelector<Coin> {
    Selector::new(|s| s.watchlist.clone(), |p| (**p).clone())
}

/// What the home screen needs to decide between spinner, content and errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub any_loading: bool,
    /// Errors per slice, in slice order.
    pub errors: Vec<(SliceKey, String)>,
}

impl HomeView {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_for(&self, slice: SliceKey) -> Option<&str> {
        self.errors
            .iter()
            .find(|(k, _)| *k == slice)
            .map(|(_, e)| e.as_str())
    }
}

type HomeKey = (
    Arc<SlicePartition<NewsItem>>,
    Arc<SlicePartition<Coin>>,
    Arc<SlicePartition<Coin>>,
);

pub fn home_selector() -> Selector<HomeKey, HomeView> {
    Selector::new(
        |s| (s.news.clone(), s.topmovers.clone(), s.watchlist.clone()),
        |(news, movers, watchlist)| {
            let errors = [
                (SliceKey::News, news.error()),
                (SliceKey::TopMovers, movers.error()),
                (SliceKey::Watchlist, watchlist.error()),
            ]
            .into_iter()
            .filter_map(|(k, e)| e.map(|e| (k, e.to_string())))
            .collect();

            HomeView {
                any_loading: news.loading() || movers.loading() || watchlist.loading(),
                errors,
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::state::action::Action;
    use crate::state::partition::{Lifecycle, RequestId};

    fn pending_news() -> Action {
        Action::News(Lifecycle::Pending {
            request_id: RequestId(1),
        })
    }

    #[test]
    fn test_same_input_returns_cached_view() {
        let selector = watchlist_selector();
        let state = AppState::default();

        let a = selector.select(&state);
        let b = selector.select(&state);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(selector.recomputations(), 1);
    }

    #[test]
    fn test_unrelated_change_keeps_cache() {
        let selector = watchlist_selector();
        let s0 = AppState::default();
        let a = selector.select(&s0);

        let s1 = s0.reduce(&pending_news());
        let b = selector.select(&s1);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(selector.recomputations(), 1);
    }

    #[test]
    fn test_relevant_change_recomputes() {
        let selector = news_selector();
        let s0 = AppState::default();
        let a = selector.select(&s0);
        let b = selector.select(&s0.reduce(&pending_news()));
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(b.loading());
        assert_eq!(selector.recomputations(), 2);
    }

    #[test]
    fn test_home_view() {
        let selector = home_selector();
        let state = AppState::default()
            .reduce(&pending_news())
            .reduce(&Action::Watchlist(Lifecycle::Rejected {
                request_id: RequestId(2),
                error: Some(FetchError::new("Failed to fetch coin prices.")),
            }));

        let view = selector.select(&state);
        assert!(view.any_loading);
        assert!(view.has_errors());
        assert_eq!(
            view.error_for(SliceKey::Watchlist),
            Some("Failed to fetch coin prices.")
        );
        assert_eq!(view.error_for(SliceKey::News), None);

        let unchanged = selector.select(&state.clone());
        assert!(Arc::ptr_eq(&view, &unchanged));
    }
}
