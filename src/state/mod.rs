//! Application state: partitions, actions, the store and its selectors.
//!
//! State flows one way. Triggers dispatch [`Action`]s into the [`Store`], the
//! store reduces them into a fresh [`AppState`] snapshot, and readers derive
//! views through memoized [`Selector`]s.

pub mod action;
pub mod app_state;
pub mod middleware;
pub mod partition;
pub mod selectors;
pub mod store;

pub use action::{Action, SliceKey};
pub use app_state::{AppState, PartitionStatus};
pub use middleware::{ActionLogger, Middleware};
pub use partition::{Lifecycle, Phase, RequestId, SlicePartition};
pub use selectors::{
    home_selector, news_selector, top_movers_selector, watchlist_selector, HomeView, MemoKey,
    PartitionSelector, Selector,
};
pub use store::{Listener, ListenerId, Store};
