//! The store: single source of truth for `AppState`.

use super::action::Action;
use super::app_state::AppState;
use super::middleware::Middleware;

use async_lock::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Change listener. Receives every new snapshot, in dispatch order.
pub type Listener = Arc<dyn Fn(&Arc<AppState>) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Holds exactly one `AppState` snapshot and applies actions to it one at a
/// time. Readers get cheap `Arc` clones of whole snapshots.
pub struct Store {
    state: RwLock<Arc<AppState>>,
    middleware: Vec<Arc<dyn Middleware>>,
    listeners: RwLock<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self::with_middleware(initial, Vec::new())
    }

    /// Middleware runs in the given order for `before`, and in the same
    /// order for `after`.
    pub fn with_middleware(initial: AppState, middleware: Vec<Arc<dyn Middleware>>) -> Self {
        Self {
            state: RwLock::new(Arc::new(initial)),
            middleware,
            listeners: RwLock::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> Arc<AppState> {
        self.state.read().await.clone()
    }

    /// Reduce `action` into a new snapshot and notify listeners.
    ///
    /// Listeners run under the store's write lock. They may spawn work that
    /// dispatches later but must not dispatch themselves.
    pub async fn dispatch(&self, action: Action) -> Arc<AppState> {
        let listeners = self.listeners.read().await.to_vec();
        let mut state = self.state.write().await;
        self.commit(&mut state, &action, &listeners)
    }

    /// Same as [`Store::dispatch`] for callers that cannot await, such as
    /// `Drop` impls.
    ///
    /// Neither lock is ever held across an await point, so this only waits
    /// for another thread's in-progress commit.
    pub fn dispatch_blocking(&self, action: Action) -> Arc<AppState> {
        let listeners = self.listeners.read_blocking().to_vec();
        let mut state = self.state.write_blocking();
        self.commit(&mut state, &action, &listeners)
    }

    fn commit(
        &self,
        state: &mut Arc<AppState>,
        action: &Action,
        listeners: &[(ListenerId, Listener)],
    ) -> Arc<AppState> {
        for m in &self.middleware {
            m.before(action, &**state);
        }

        let next = Arc::new(state.reduce(action));
        *state = next.clone();

        for m in &self.middleware {
            m.after(action, &next);
        }
        for (_, listener) in listeners {
            listener(&next);
        }

        next
    }

    pub async fn subscribe(
        &self,
        listener: impl Fn(&Arc<AppState>) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(listener);
        self.listeners.write().await.push((id, listener));
        id
    }

    /// Returns whether the listener was registered.
    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().await;
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
