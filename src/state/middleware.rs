//! Store middleware: observers that run around every dispatched action.

use super::action::Action;
use super::app_state::AppState;

/// Observes each action before and after it is reduced.
///
/// Middleware cannot alter or swallow actions. Both hooks run while the store
/// holds its write lock, so they must not dispatch.
pub trait Middleware: Send + Sync {
    fn before(&self, _action: &Action, _state: &AppState) {}

    fn after(&self, _action: &Action, _state: &AppState) {}
}

/// Logs every action and the resulting partition status via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionLogger;

impl Middleware for ActionLogger {
    fn before(&self, action: &Action, state: &AppState) {
        let prev = state.status(action.slice());
        tracing::debug!(
            action = %action.kind(),
            request_id = ?action.request_id(),
            prev_phase = ?prev.phase,
            prev_len = prev.len,
            "dispatch"
        );
    }

    fn after(&self, action: &Action, state: &AppState) {
        let next = state.status(action.slice());
        match &next.error {
            Some(error) if action.is_rejection() => tracing::warn!(
                action = %action.kind(),
                slice = %next.slice,
                error = %error,
                "fetch failed"
            ),
            _ => tracing::debug!(
                action = %action.kind(),
                slice = %next.slice,
                phase = ?next.phase,
                len = next.len,
                "applied"
            ),
        }
    }
}
