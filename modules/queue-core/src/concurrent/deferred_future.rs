use alloc::sync::Arc;
use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use spin::Mutex as SpinMutex;

use super::deferred::DeferredInner;

/// Future observing the settlement of a [`super::Deferred`] cell.
///
/// The settled value is cloned to every observer, so the future can be cloned
/// and awaited from multiple places.
pub struct DeferredFuture<T, E> {
  inner: Arc<SpinMutex<DeferredInner<T, E>>>,
}

impl<T, E> DeferredFuture<T, E> {
  pub(crate) const fn new(inner: Arc<SpinMutex<DeferredInner<T, E>>>) -> Self {
    Self { inner }
  }
}

impl<T, E> Future for DeferredFuture<T, E>
where
  T: Clone,
  E: Clone,
{
  type Output = Result<T, E>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let mut guard = self.inner.lock();
    if let Some(result) = guard.result() {
      return Poll::Ready(result.clone());
    }
    guard.register_waker(cx.waker());
    Poll::Pending
  }
}

impl<T, E> Clone for DeferredFuture<T, E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}
