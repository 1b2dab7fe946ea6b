//! Async state slices: the trigger side of each partition.
//!
//! A trigger dispatches `pending` right away and hands back a [`FetchHandle`].
//! The request and its single `fulfilled` or `rejected` dispatch belong to the
//! fetch itself, not to the handle: inside a tokio runtime the fetch is
//! spawned at trigger time and the handle only observes it. Triggers are never
//! coalesced: two triggers mean two requests, and whichever completes last
//! owns the partition's data.

pub mod news;
pub mod top_movers;
pub mod watchlist;

use crate::error::{FetchError, GatewayError};
use crate::state::{Action, Lifecycle, RequestId, SliceKey, Store};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// User-facing failure messages for one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureCopy {
    /// Used verbatim when the server answers with a non-200 status.
    pub status: &'static str,
    /// Prefixed to the cause for every other failure.
    pub prefix: &'static str,
}

impl FailureCopy {
    pub fn normalize(&self, err: &GatewayError) -> FetchError {
        if err.is_status() {
            FetchError::new(self.status)
        } else {
            FetchError::new(format!("{}: {}", self.prefix, err))
        }
    }
}

/// An in-flight fetch. Resolves to the payload that was stored, or to the
/// error that was stored.
///
/// Dropping the handle never leaves the partition loading. A spawned fetch
/// keeps running and settles on its own. A fetch with no runtime to run on
/// is settled with a bare `rejected` when the handle goes away.
#[must_use = "await the handle to observe the outcome"]
pub struct FetchHandle<T> {
    request_id: RequestId,
    slice: SliceKey,
    inner: BoxFuture<'static, Result<Vec<T>, FetchError>>,
}

impl<T> FetchHandle<T> {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn slice(&self) -> SliceKey {
        self.slice
    }
}

impl<T> std::fmt::Debug for FetchHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchHandle")
            .field("request_id", &self.request_id)
            .field("slice", &self.slice)
            .finish_non_exhaustive()
    }
}

impl<T> Future for FetchHandle<T> {
    type Output = Result<Vec<T>, FetchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

/// Owes the store exactly one outcome for a pending request. Pays it with a
/// bare `rejected` if the fetch is dropped before it dispatched one.
struct Settlement<T> {
    store: Arc<Store>,
    slice: SliceKey,
    request_id: RequestId,
    wrap: fn(Lifecycle<T>) -> Action,
    settled: bool,
}

impl<T> Settlement<T> {
    async fn settle(&mut self, event: Lifecycle<T>) {
        self.store.dispatch((self.wrap)(event)).await;
        self.settled = true;
    }
}

impl<T> Drop for Settlement<T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!(slice = %self.slice, request_id = %self.request_id, "fetch abandoned before completion");
        self.store.dispatch_blocking((self.wrap)(Lifecycle::Rejected {
            request_id: self.request_id,
            error: None,
        }));
    }
}

/// Dispatch `pending`, then start the request and its outcome dispatch.
pub(crate) async fn trigger<T, Fut>(
    store: &Arc<Store>,
    slice: SliceKey,
    request_id: RequestId,
    wrap: fn(Lifecycle<T>) -> Action,
    copy: FailureCopy,
    fetch: Fut,
) -> FetchHandle<T>
where
    T: Clone + Send + 'static,
    Fut: Future<Output = Result<Vec<T>, GatewayError>> + Send + 'static,
{
    tracing::debug!(slice = %slice, request_id = %request_id, "trigger");
    store.dispatch(wrap(Lifecycle::Pending { request_id })).await;

    let mut settlement = Settlement {
        store: store.clone(),
        slice,
        request_id,
        wrap,
        settled: false,
    };
    let work = async move {
        match fetch.await {
            Ok(payload) => {
                settlement
                    .settle(Lifecycle::Fulfilled {
                        request_id,
                        payload: payload.clone(),
                    })
                    .await;
                Ok(payload)
            }
            Err(err) => {
                let error = copy.normalize(&err);
                tracing::warn!(slice = %slice, request_id = %request_id, cause = %err, "fetch rejected");
                settlement
                    .settle(Lifecycle::Rejected {
                        request_id,
                        error: Some(error.clone()),
                    })
                    .await;
                Err(error)
            }
        }
    }
    .boxed();

    FetchHandle {
        request_id,
        slice,
        inner: detach(work, copy),
    }
}

/// Run `work` on the current tokio runtime, if there is one, so that the
/// request proceeds whether or not the handle is ever polled.
#[cfg(feature = "http")]
fn detach<T: Send + 'static>(
    work: BoxFuture<'static, Result<Vec<T>, FetchError>>,
    copy: FailureCopy,
) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => {
            let task = runtime.spawn(work);
            async move {
                task.await
                    .unwrap_or_else(|e| Err(FetchError::new(format!("{}: {}", copy.prefix, e))))
            }
            .boxed()
        }
        Err(_) => work,
    }
}

#[cfg(not(feature = "http"))]
fn detach<T: Send + 'static>(
    work: BoxFuture<'static, Result<Vec<T>, FetchError>>,
    _copy: FailureCopy,
) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
    work
}
