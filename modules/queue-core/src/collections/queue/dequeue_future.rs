use alloc::sync::Arc;
use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::{pending_consumer::PendingCell, QueueError};

enum DequeueFutureInner<T> {
  Ready(Option<Result<T, QueueError<T>>>),
  Waiting(Arc<PendingCell<T>>),
}

/// Future returned by [`super::AsyncQueue::dequeue`].
///
/// Resolves with the dequeued item, or fails when the queue closes first or
/// the caller's token was already cancelled at registration time. Dropping a
/// still-pending future abandons its registration: the queue skips (and
/// discards) the stale entry the next time an enqueue or close scans the
/// pending list. A registration whose token cancels but that is never
/// scanned again stays in the list until the queue closes; callers that
/// cancel must stop awaiting on their own.
pub struct DequeueFuture<T> {
  inner: DequeueFutureInner<T>,
}

impl<T> DequeueFuture<T> {
  pub(crate) const fn ready(result: Result<T, QueueError<T>>) -> Self {
    Self { inner: DequeueFutureInner::Ready(Some(result)) }
  }

  pub(crate) const fn waiting(cell: Arc<PendingCell<T>>) -> Self {
    Self { inner: DequeueFutureInner::Waiting(cell) }
  }
}

// Neither variant is structurally pinned: `Ready` owns its result and
// `Waiting` holds an `Arc` to the shared cell.
impl<T> Unpin for DequeueFuture<T> {}

impl<T> Future for DequeueFuture<T> {
  type Output = Result<T, QueueError<T>>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();

    match &mut this.inner {
      | DequeueFutureInner::Ready(result) => match result.take() {
        | Some(result) => Poll::Ready(result),
        | None => {
          debug_assert!(false, "DequeueFuture polled after completion");
          Poll::Pending
        },
      },
      | DequeueFutureInner::Waiting(cell) => cell.poll_result(cx),
    }
  }
}

impl<T> Drop for DequeueFuture<T> {
  fn drop(&mut self) {
    if let DequeueFutureInner::Waiting(cell) = &self.inner {
      cell.abandon();
    }
  }
}
