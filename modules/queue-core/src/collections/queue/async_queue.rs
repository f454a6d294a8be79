use alloc::{boxed::Box, sync::Arc};

use spin::Mutex as SpinMutex;

use super::{
  queue_core::{DequeueDecision, QueueCore},
  CloseFuture, CloseReason, DequeueFuture, EnqueueOutcome, ListenerFn, QueueConfig, QueueError, QueueEvent, QueueState,
};
use crate::{
  collections::buffer::{BufferBackend, BufferConfigError, Capacity, OverflowPolicy, RingBuffer, VecBuffer},
  sync::{CancellationSignal, FaultReason},
};

/// Asynchronous hand-off queue with a closable lifecycle.
///
/// Cheap to clone; all clones share the same state. Every operation acquires
/// the internal lock once, decides synchronously, and performs wake-ups and
/// listener dispatch only after the lock has been released, so callbacks and
/// awakened consumers always observe a consistent queue.
pub struct AsyncQueue<T> {
  core: Arc<SpinMutex<QueueCore<T>>>,
}

impl<T> AsyncQueue<T>
where
  T: Clone + Send + 'static,
{
  /// Creates an unbounded queue.
  #[must_use]
  pub fn unbounded() -> Self {
    Self::with_buffer(Box::new(VecBuffer::unbounded()))
  }

  /// Creates a bounded queue with the specified capacity and overflow policy.
  ///
  /// # Errors
  ///
  /// Returns an error when the capacity is zero or exceeds
  /// [`crate::collections::buffer::MAX_CAPACITY`].
  pub fn bounded(capacity: usize, policy: OverflowPolicy) -> Result<Self, BufferConfigError> {
    Ok(Self::with_buffer(Box::new(RingBuffer::with_capacity(capacity, policy)?)))
  }

  /// Creates a queue from a full buffer configuration.
  ///
  /// # Errors
  ///
  /// Returns an error when the configuration is invalid, for example a zero
  /// capacity or a policy combined with an unbounded buffer.
  pub fn with_config(config: QueueConfig<T>) -> Result<Self, BufferConfigError> {
    Ok(Self::with_buffer(config.build_buffer()?))
  }

  /// Creates a queue over a caller-supplied buffer backend.
  #[must_use]
  pub fn with_buffer(buffer: Box<dyn BufferBackend<T> + Send>) -> Self {
    Self { core: Arc::new(SpinMutex::new(QueueCore::new(buffer))) }
  }

  /// Submits an item.
  ///
  /// When a live consumer is waiting, the item bypasses the buffer and is
  /// handed directly to the oldest registration. Otherwise the item is
  /// buffered, subject to the overflow policy.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`], [`QueueError::ReadOnly`] or
  /// [`QueueError::Closed`], each carrying the rejected item back to the
  /// caller, or [`QueueError::Disconnected`] when the buffer was disposed
  /// underneath the queue.
  pub fn enqueue(&self, item: T) -> Result<EnqueueOutcome, QueueError<T>> {
    let post = self.core.lock().enqueue(item)?;
    Ok(post.run())
  }

  /// Non-failing variant of [`AsyncQueue::enqueue`] for callers that treat
  /// rejection as a boolean: `Ok(true)` when the item was accepted,
  /// `Ok(false)` when it was rejected by capacity or lifecycle state.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Disconnected`] when the buffer was disposed
  /// underneath the queue; lifecycle and capacity rejections are `Ok(false)`.
  pub fn try_enqueue(&self, item: T) -> Result<bool, QueueError<T>> {
    match self.enqueue(item) {
      | Ok(_) => Ok(true),
      | Err(QueueError::Full(_) | QueueError::ReadOnly(_) | QueueError::Closed(_)) => Ok(false),
      | Err(error) => Err(error),
    }
  }

  /// Requests the next item.
  ///
  /// The registration happens immediately, before the returned future is
  /// first polled, so concurrent dequeues are satisfied in call order.
  #[must_use]
  pub fn dequeue(&self) -> DequeueFuture<T> {
    self.dequeue_inner(None)
  }

  /// Requests the next item under a cancellation token.
  ///
  /// An already-cancelled token fails the dequeue immediately with the
  /// token's reason. A token that cancels while the registration waits makes
  /// the registration stale: it is skipped and discarded when the queue next
  /// scans it, and the caller is expected to stop awaiting. Tokens that
  /// report [`crate::sync::TokenBehavior::Inert`] are ignored entirely.
  #[must_use]
  pub fn dequeue_with(&self, token: Arc<dyn CancellationSignal>) -> DequeueFuture<T> {
    let token = if token.behavior().is_cancellable() { Some(token) } else { None };
    self.dequeue_inner(token)
  }

  fn dequeue_inner(&self, token: Option<Arc<dyn CancellationSignal>>) -> DequeueFuture<T> {
    let decision = self.core.lock().dequeue(token);
    match decision {
      | DequeueDecision::Ready { result, listeners, payload, close } => {
        if let Some(payload) = payload {
          for listener in &listeners {
            listener(&payload);
          }
        }
        if let Some(close) = close {
          close.run();
        }
        DequeueFuture::ready(result)
      },
      | DequeueDecision::Waiting(cell) => DequeueFuture::waiting(cell),
    }
  }

  /// Removes the next buffered item without waiting.
  ///
  /// Returns `None` when the buffer is empty or the queue is closed. On an
  /// empty read-only queue this observes exhaustion and closes the queue.
  pub fn try_dequeue(&self) -> Option<T> {
    let (item, listeners, payload, close) = self.core.lock().try_dequeue();
    if let Some(payload) = payload {
      for listener in &listeners {
        listener(&payload);
      }
    }
    if let Some(close) = close {
      close.run();
    }
    item
  }

  /// Awaits the next item, mapping every failure to `None`.
  ///
  /// Convenient for drain loops: `while let Some(item) = queue.next_item().await`.
  pub async fn next_item(&self) -> Option<T> {
    self.dequeue().await.ok()
  }

  /// Transitions the queue to read-only: enqueues are rejected from now on
  /// while buffered items remain dequeueable. An already-empty queue closes
  /// immediately.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Disconnected`] when the queue is already closed.
  pub fn set_read_only(&self) -> Result<(), QueueError<T>> {
    let close = self.core.lock().set_read_only()?;
    if let Some(close) = close {
      close.run();
    }
    Ok(())
  }

  /// Closes the queue, rejecting all pending consumers with a disconnect.
  ///
  /// Returns `true` when this call performed the transition and `false` when
  /// the queue was already closed.
  pub fn close(&self) -> bool {
    let close = self.core.lock().begin_close(CloseReason::Finished);
    match close {
      | Some(close) => {
        close.run();
        true
      },
      | None => false,
    }
  }

  /// Closes the queue carrying an application fault.
  ///
  /// Pending consumers are rejected with a disconnect naming the fault, and
  /// [`AsyncQueue::on_close`] futures fail with it. Returns `false` when the
  /// queue was already closed, in which case the fault is discarded.
  pub fn close_with(&self, fault: FaultReason) -> bool {
    let close = self.core.lock().begin_close(CloseReason::Faulted(fault));
    match close {
      | Some(close) => {
        close.run();
        true
      },
      | None => false,
    }
  }

  /// Alias of [`AsyncQueue::close`] for drop-style call sites. Idempotent.
  pub fn dispose(&self) {
    let _ = self.close();
  }

  /// Returns a future that settles when the queue closes.
  ///
  /// Resolves immediately when the queue is already closed. Every call
  /// observes the same single settlement.
  #[must_use]
  pub fn on_close(&self) -> CloseFuture {
    self.core.lock().subscribe_close().subscribe()
  }

  /// Registers a listener for the specified event. `once` listeners detach
  /// after their first dispatch.
  ///
  /// Enqueue listeners registered on a read-only queue are dropped silently,
  /// since no further enqueue can ever fire them.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Disconnected`] when the queue is already closed.
  pub fn on(&self, event: QueueEvent, listener: ListenerFn<T>, once: bool) -> Result<(), QueueError<T>> {
    self.core.lock().add_listener(event, listener, once)
  }

  /// Detaches a previously registered listener, matched by callback
  /// identity. Returns whether a registration was removed.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Disconnected`] when the queue is already closed.
  pub fn off(&self, event: QueueEvent, listener: &ListenerFn<T>) -> Result<bool, QueueError<T>> {
    self.core.lock().remove_listener(event, listener)
  }

  /// Returns the current lifecycle state.
  #[must_use]
  pub fn state(&self) -> QueueState {
    self.core.lock().state()
  }

  /// Returns whether the queue has closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.state().is_closed()
  }

  /// Returns the number of buffered items. Pending consumers do not count.
  #[must_use]
  pub fn len(&self) -> usize {
    self.core.lock().len()
  }

  /// Returns whether the buffer holds no items.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the buffer capacity.
  #[must_use]
  pub fn capacity(&self) -> Capacity {
    self.core.lock().capacity()
  }
}

impl<T> Clone for AsyncQueue<T> {
  fn clone(&self) -> Self {
    Self { core: self.core.clone() }
  }
}

impl<T> Default for AsyncQueue<T>
where
  T: Clone + Send + 'static,
{
  fn default() -> Self {
    Self::unbounded()
  }
}
