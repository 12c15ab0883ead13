//! Cancellable fetches tied to a view's lifetime.
//!
//! A view that goes away must not apply results that arrive afterwards.
//! Every fetch a view starts is a [`ScopedTask`]; dropping the task, or the
//! [`ViewScope`] that spawned it, aborts the fetch.

use std::future::Future;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// A spawned fetch that is aborted when dropped.
#[derive(Debug)]
pub struct ScopedTask<T> {
    handle: Option<JoinHandle<ApiResult<T>>>,
}

impl<T: Send + 'static> ScopedTask<T> {
    /// Spawn `fut` on the current tokio runtime.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = ApiResult<T>> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(fut)),
        }
    }

    /// A task that was never started; [`Self::join`] reports `Cancelled`.
    pub fn cancelled() -> Self {
        Self { handle: None }
    }

    /// Abort the fetch. A later [`Self::join`] reports `Cancelled`.
    pub fn cancel(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    fn abort_handle(&self) -> Option<AbortHandle> {
        self.handle.as_ref().map(JoinHandle::abort_handle)
    }

    /// Wait for the result.
    pub async fn join(mut self) -> ApiResult<T> {
        let Some(handle) = self.handle.take() else {
            return Err(ApiError::Cancelled);
        };
        match handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ApiError::Cancelled),
            Err(e) => {
                error!(error = %e, "Fetch task panicked");
                Err(ApiError::Unexpected(format!("fetch task failed: {e}")))
            }
        }
    }
}

impl<T> Drop for ScopedTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

/// The fetches of one mounted view.
#[derive(Debug)]
pub struct ViewScope {
    id: Uuid,
    view: &'static str,
    handles: Vec<AbortHandle>,
    cancelled: bool,
}

impl ViewScope {
    pub fn new(view: &'static str) -> Self {
        let id = Uuid::new_v4();
        debug!(view, %id, "View mounted");
        Self {
            id,
            view,
            handles: Vec::new(),
            cancelled: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> &'static str {
        self.view
    }

    /// Spawn a fetch owned by this view.
    ///
    /// After [`Self::cancel_all`] the fetch is dropped without being spawned.
    pub fn spawn<T, F>(&mut self, fut: F) -> ScopedTask<T>
    where
        T: Send + 'static,
        F: Future<Output = ApiResult<T>> + Send + 'static,
    {
        if self.cancelled {
            debug!(view = self.view, id = %self.id, "Fetch refused, view already unmounted");
            return ScopedTask::cancelled();
        }
        let task = ScopedTask::spawn(fut);
        if let Some(handle) = task.abort_handle() {
            self.handles.retain(|h| !h.is_finished());
            self.handles.push(handle);
        }
        task
    }

    /// Fetches still running.
    pub fn active(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Abort every fetch of this view; results that were still in flight are
    /// never delivered.
    pub fn cancel_all(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        let aborted = self.active();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        debug!(view = self.view, id = %self.id, aborted, "View unmounted");
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
