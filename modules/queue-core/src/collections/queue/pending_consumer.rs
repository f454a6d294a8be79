use alloc::sync::Arc;
use core::task::{Context, Poll, Waker};

use spin::Mutex as SpinMutex;

use super::QueueError;
use crate::sync::CancellationSignal;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PendingState {
  Waiting,
  Settled,
  Abandoned,
}

struct PendingSlot<T> {
  state:  PendingState,
  waker:  Option<Waker>,
  result: Option<Result<T, QueueError<T>>>,
}

/// Settlement cell shared between a registered dequeue and the queue core.
///
/// Settled at most once; an abandoned cell (its future was dropped) is
/// skipped, never resolved, when the queue later scans it.
pub(crate) struct PendingCell<T> {
  slot: SpinMutex<PendingSlot<T>>,
}

impl<T> PendingCell<T> {
  pub(crate) const fn new() -> Self {
    Self { slot: SpinMutex::new(PendingSlot { state: PendingState::Waiting, waker: None, result: None }) }
  }

  /// Stores the item and returns the waker to wake. When the cell is no
  /// longer waiting the item is handed back to the caller, never dropped, so
  /// a hand-off that loses the race with an abandoning `Drop` can move on to
  /// the next registration.
  pub(crate) fn fulfil(&self, item: T) -> Result<Option<Waker>, T> {
    let mut guard = self.slot.lock();
    if guard.state != PendingState::Waiting {
      return Err(item);
    }
    guard.state = PendingState::Settled;
    guard.result = Some(Ok(item));
    Ok(guard.waker.take())
  }

  /// Stores the error and returns the waker to wake, or `None` when the cell
  /// is no longer waiting (the error is dropped in that case).
  pub(crate) fn reject(&self, error: QueueError<T>) -> Option<Waker> {
    let mut guard = self.slot.lock();
    if guard.state != PendingState::Waiting {
      return None;
    }
    guard.state = PendingState::Settled;
    guard.result = Some(Err(error));
    guard.waker.take()
  }

  /// Marks the registration as abandoned by its consumer.
  pub(crate) fn abandon(&self) {
    let mut guard = self.slot.lock();
    if guard.state == PendingState::Waiting {
      guard.state = PendingState::Abandoned;
      guard.waker.take();
    }
  }

  pub(crate) fn is_abandoned(&self) -> bool {
    self.slot.lock().state == PendingState::Abandoned
  }

  pub(crate) fn poll_result(&self, cx: &mut Context<'_>) -> Poll<Result<T, QueueError<T>>> {
    let mut guard = self.slot.lock();
    if let Some(result) = guard.result.take() {
      return Poll::Ready(result);
    }

    match guard.waker.as_ref() {
      | Some(existing) if existing.will_wake(cx.waker()) => {},
      | _ => {
        guard.waker.replace(cx.waker().clone());
      },
    }
    Poll::Pending
  }
}

/// A registered, not-yet-satisfied dequeue request owned by the queue's
/// internal FIFO of registrations.
pub(crate) struct PendingConsumer<T> {
  cell:  Arc<PendingCell<T>>,
  token: Option<Arc<dyn CancellationSignal>>,
}

impl<T> PendingConsumer<T> {
  pub(crate) const fn new(cell: Arc<PendingCell<T>>, token: Option<Arc<dyn CancellationSignal>>) -> Self {
    Self { cell, token }
  }

  /// Liveness predicate consulted at resolution time: the registration is
  /// live unless its future was dropped or its token has fired.
  pub(crate) fn is_live(&self) -> bool {
    if self.cell.is_abandoned() {
      return false;
    }
    self.token.as_ref().map_or(true, |token| !token.is_cancelled())
  }

  pub(crate) fn fulfil(&self, item: T) -> Result<Option<Waker>, T> {
    self.cell.fulfil(item)
  }

  pub(crate) fn reject(&self, error: QueueError<T>) -> Option<Waker> {
    self.cell.reject(error)
  }
}
