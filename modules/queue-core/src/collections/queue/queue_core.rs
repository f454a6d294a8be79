use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::task::Waker;

use super::{
  listener::ListenerList,
  pending_consumer::{PendingCell, PendingConsumer},
  CloseReason, EnqueueOutcome, ListenerFn, QueueError, QueueEvent, QueueState,
};
use crate::{
  collections::{
    buffer::{BufferBackend, BufferError, Capacity},
    fifo_queue::FifoQueue,
  },
  concurrent::Deferred,
  sync::{CancellationSignal, FaultReason},
};

/// Work to perform after the state lock has been released: waking a consumer
/// and firing listeners never happens inside a mutation.
pub(crate) struct EnqueuePost<T> {
  outcome:   EnqueueOutcome,
  waker:     Option<Waker>,
  listeners: Vec<ListenerFn<T>>,
  payload:   Option<T>,
}

impl<T> EnqueuePost<T> {
  pub(crate) fn run(self) -> EnqueueOutcome {
    if let Some(waker) = self.waker {
      waker.wake();
    }
    if let Some(payload) = self.payload {
      for listener in &self.listeners {
        listener(&payload);
      }
    }
    self.outcome
  }
}

/// Deferred completion of a close transition: settles the close signal and
/// wakes rejected consumers outside the state lock.
pub(crate) struct ClosePost {
  wakers: Vec<Waker>,
  signal: Deferred<(), FaultReason>,
  reason: CloseReason,
}

impl ClosePost {
  pub(crate) fn run(self) {
    match self.reason {
      | CloseReason::Faulted(fault) => {
        let _ = self.signal.reject(fault);
      },
      | CloseReason::Finished | CloseReason::Drained => {
        let _ = self.signal.resolve(());
      },
    }
    for waker in self.wakers {
      waker.wake();
    }
  }
}

/// Synchronous half of a dequeue decision, resolved under the state lock.
pub(crate) enum DequeueDecision<T> {
  Ready {
    result:    Result<T, QueueError<T>>,
    listeners: Vec<ListenerFn<T>>,
    payload:   Option<T>,
    close:     Option<ClosePost>,
  },
  Waiting(Arc<PendingCell<T>>),
}

/// Mutable queue state; exclusively owned by [`super::AsyncQueue`] behind its
/// lock. No suspension point exists between reading and mutating this state.
pub(crate) struct QueueCore<T> {
  state:             QueueState,
  buffer:            Box<dyn BufferBackend<T> + Send>,
  pending:           FifoQueue<PendingConsumer<T>>,
  enqueue_listeners: ListenerList<T>,
  dequeue_listeners: ListenerList<T>,
  close_signal:      Deferred<(), FaultReason>,
  close_reason:      Option<CloseReason>,
}

impl<T> QueueCore<T>
where
  T: Clone + Send + 'static,
{
  pub(crate) fn new(buffer: Box<dyn BufferBackend<T> + Send>) -> Self {
    Self {
      state: QueueState::ReadWrite,
      buffer,
      pending: FifoQueue::new(),
      enqueue_listeners: ListenerList::new(),
      dequeue_listeners: ListenerList::new(),
      close_signal: Deferred::new(),
      close_reason: None,
    }
  }

  pub(crate) fn state(&self) -> QueueState {
    self.state
  }

  pub(crate) fn len(&self) -> usize {
    self.buffer.len()
  }

  pub(crate) fn capacity(&self) -> Capacity {
    self.buffer.capacity()
  }

  pub(crate) fn subscribe_close(&self) -> Deferred<(), FaultReason> {
    self.close_signal.clone()
  }

  fn current_close_reason(&self) -> CloseReason {
    self.close_reason.clone().unwrap_or(CloseReason::Finished)
  }

  pub(crate) fn enqueue(&mut self, item: T) -> Result<EnqueuePost<T>, QueueError<T>> {
    match self.state {
      | QueueState::Closed => return Err(QueueError::Closed(item)),
      | QueueState::ReadOnly => return Err(QueueError::ReadOnly(item)),
      | QueueState::ReadWrite => {},
    }

    // Hand-off: the oldest live registration wins; stale registrations are
    // discarded as the scan passes them.
    let mut item = item;
    while let Some(consumer) = self.pending.poll() {
      if !consumer.is_live() {
        continue;
      }
      let payload = if self.enqueue_listeners.is_empty() { None } else { Some(item.clone()) };
      match consumer.fulfil(item) {
        | Ok(waker) => {
          let listeners = if payload.is_some() { self.enqueue_listeners.snapshot() } else { Vec::new() };
          return Ok(EnqueuePost { outcome: EnqueueOutcome::HandedOff, waker, listeners, payload });
        },
        // Abandoned between the liveness check and the settlement; take the
        // item back and keep scanning.
        | Err(returned) => item = returned,
      }
    }

    let payload = if self.enqueue_listeners.is_empty() { None } else { Some(item.clone()) };
    match self.buffer.write(item) {
      | Ok(outcome) => {
        let listeners = if payload.is_some() { self.enqueue_listeners.snapshot() } else { Vec::new() };
        Ok(EnqueuePost { outcome: outcome.into(), waker: None, listeners, payload })
      },
      | Err(BufferError::Full(item)) => Err(QueueError::Full(item)),
      | Err(BufferError::Disposed) => Err(QueueError::Disconnected(self.current_close_reason())),
    }
  }

  pub(crate) fn dequeue(&mut self, token: Option<Arc<dyn CancellationSignal>>) -> DequeueDecision<T> {
    if self.state.is_closed() {
      return DequeueDecision::Ready {
        result:    Err(QueueError::Disconnected(self.current_close_reason())),
        listeners: Vec::new(),
        payload:   None,
        close:     None,
      };
    }

    if let Some(token) = &token {
      if token.is_cancelled() {
        return DequeueDecision::Ready {
          result:    Err(QueueError::Cancelled(token.reason())),
          listeners: Vec::new(),
          payload:   None,
          close:     None,
        };
      }
    }

    match self.buffer.read() {
      | Ok(Some(item)) => {
        let payload = if self.dequeue_listeners.is_empty() { None } else { Some(item.clone()) };
        let listeners = if payload.is_some() { self.dequeue_listeners.snapshot() } else { Vec::new() };
        DequeueDecision::Ready { result: Ok(item), listeners, payload, close: None }
      },
      | Ok(None) => {
        if self.state.is_read_only() {
          // Exhaustion: no buffered item can ever arrive again.
          let close = self.begin_close(CloseReason::Drained);
          DequeueDecision::Ready {
            result: Err(QueueError::Disconnected(CloseReason::Drained)),
            listeners: Vec::new(),
            payload: None,
            close,
          }
        } else {
          let cell = Arc::new(PendingCell::new());
          self.pending.offer(PendingConsumer::new(cell.clone(), token));
          DequeueDecision::Waiting(cell)
        }
      },
      | Err(_) => DequeueDecision::Ready {
        result:    Err(QueueError::Disconnected(self.current_close_reason())),
        listeners: Vec::new(),
        payload:   None,
        close:     None,
      },
    }
  }

  pub(crate) fn try_dequeue(&mut self) -> (Option<T>, Vec<ListenerFn<T>>, Option<T>, Option<ClosePost>) {
    if self.state.is_closed() {
      return (None, Vec::new(), None, None);
    }

    match self.buffer.read() {
      | Ok(Some(item)) => {
        let payload = if self.dequeue_listeners.is_empty() { None } else { Some(item.clone()) };
        let listeners = if payload.is_some() { self.dequeue_listeners.snapshot() } else { Vec::new() };
        (Some(item), listeners, payload, None)
      },
      | Ok(None) if self.state.is_read_only() => {
        let close = self.begin_close(CloseReason::Drained);
        (None, Vec::new(), None, close)
      },
      | Ok(None) | Err(_) => (None, Vec::new(), None, None),
    }
  }

  pub(crate) fn set_read_only(&mut self) -> Result<Option<ClosePost>, QueueError<T>> {
    if self.state.is_closed() {
      return Err(QueueError::Disconnected(self.current_close_reason()));
    }

    self.state = QueueState::ReadOnly;
    // No further enqueue can arrive, so enqueue listeners are dead weight.
    self.enqueue_listeners.clear();

    if self.buffer.is_empty() {
      return Ok(self.begin_close(CloseReason::Drained));
    }
    Ok(None)
  }

  /// Performs the terminal transition. Returns `None` when already closed.
  pub(crate) fn begin_close(&mut self, reason: CloseReason) -> Option<ClosePost> {
    if self.state.is_closed() {
      return None;
    }

    self.state = QueueState::Closed;
    self.close_reason = Some(reason.clone());
    self.buffer.dispose();
    self.enqueue_listeners.clear();
    self.dequeue_listeners.clear();

    let mut wakers = Vec::new();
    for consumer in self.pending.drain() {
      if !consumer.is_live() {
        continue;
      }
      if let Some(waker) = consumer.reject(QueueError::Disconnected(reason.clone())) {
        wakers.push(waker);
      }
    }

    Some(ClosePost { wakers, signal: self.close_signal.clone(), reason })
  }

  pub(crate) fn add_listener(&mut self, event: QueueEvent, listener: ListenerFn<T>, once: bool) -> Result<(), QueueError<T>> {
    if self.state.is_closed() {
      return Err(QueueError::Disconnected(self.current_close_reason()));
    }

    match event {
      | QueueEvent::Enqueue => {
        if self.state.is_read_only() {
          // No further enqueues are possible; registering is a no-op.
          return Ok(());
        }
        self.enqueue_listeners.insert(listener, once);
      },
      | QueueEvent::Dequeue => {
        self.dequeue_listeners.insert(listener, once);
      },
    }
    Ok(())
  }

  pub(crate) fn remove_listener(&mut self, event: QueueEvent, listener: &ListenerFn<T>) -> Result<bool, QueueError<T>> {
    if self.state.is_closed() {
      return Err(QueueError::Disconnected(self.current_close_reason()));
    }

    let removed = match event {
      | QueueEvent::Enqueue => self.enqueue_listeners.remove(listener),
      | QueueEvent::Dequeue => self.dequeue_listeners.remove(listener),
    };
    Ok(removed)
  }
}
