use alloc::{sync::Arc, vec::Vec};
use core::task::Waker;

use spin::Mutex as SpinMutex;

use super::DeferredFuture;

#[cfg(test)]
mod tests;

pub(crate) struct DeferredInner<T, E> {
  result: Option<Result<T, E>>,
  wakers: Vec<Waker>,
}

impl<T, E> DeferredInner<T, E> {
  pub(crate) fn result(&self) -> Option<&Result<T, E>> {
    self.result.as_ref()
  }

  pub(crate) fn register_waker(&mut self, waker: &Waker) {
    if self.wakers.iter().any(|existing| existing.will_wake(waker)) {
      return;
    }
    self.wakers.push(waker.clone());
  }
}

/// Single-resolution completion cell.
///
/// `resolve`/`reject` settle the cell exactly once; later calls are no-ops.
/// Any number of observers can await the settled value through
/// [`Deferred::subscribe`], including observers that subscribe after
/// settlement.
pub struct Deferred<T, E> {
  inner: Arc<SpinMutex<DeferredInner<T, E>>>,
}

impl<T, E> Deferred<T, E> {
  /// Creates an unsettled cell.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Arc::new(SpinMutex::new(DeferredInner { result: None, wakers: Vec::new() })) }
  }

  /// Settles the cell with a success value. Returns `false` when the cell was
  /// already settled, in which case the value is dropped.
  pub fn resolve(&self, value: T) -> bool {
    self.settle(Ok(value))
  }

  /// Settles the cell with an error. Returns `false` when the cell was
  /// already settled, in which case the error is dropped.
  pub fn reject(&self, error: E) -> bool {
    self.settle(Err(error))
  }

  /// Indicates whether the cell has been settled.
  #[must_use]
  pub fn is_settled(&self) -> bool {
    self.inner.lock().result.is_some()
  }

  /// Returns a future observing the settlement of this cell.
  #[must_use]
  pub fn subscribe(&self) -> DeferredFuture<T, E> {
    DeferredFuture::new(self.inner.clone())
  }

  fn settle(&self, result: Result<T, E>) -> bool {
    let wakers = {
      let mut guard = self.inner.lock();
      if guard.result.is_some() {
        return false;
      }
      guard.result = Some(result);
      core::mem::take(&mut guard.wakers)
    };

    for waker in wakers {
      waker.wake();
    }
    true
  }
}

impl<T, E> Clone for Deferred<T, E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T, E> Default for Deferred<T, E> {
  fn default() -> Self {
    Self::new()
  }
}
