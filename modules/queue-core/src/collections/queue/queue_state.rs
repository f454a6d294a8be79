/// Lifecycle state of an async queue.
///
/// The state only moves forward: `ReadWrite -> ReadOnly -> Closed`, or
/// `ReadWrite -> Closed` directly. `Closed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueState {
  /// Items may be enqueued and dequeued.
  ReadWrite,
  /// No further items may be enqueued; buffered items remain drainable.
  ReadOnly,
  /// Terminal. The buffer is empty and every pending consumer has been
  /// resolved or rejected.
  Closed,
}

impl QueueState {
  /// Indicates whether producers may still enqueue.
  #[must_use]
  pub const fn is_read_write(self) -> bool {
    matches!(self, Self::ReadWrite)
  }

  /// Indicates whether the queue is draining.
  #[must_use]
  pub const fn is_read_only(self) -> bool {
    matches!(self, Self::ReadOnly)
  }

  /// Indicates whether the queue has reached its terminal state.
  #[must_use]
  pub const fn is_closed(self) -> bool {
    matches!(self, Self::Closed)
  }
}
