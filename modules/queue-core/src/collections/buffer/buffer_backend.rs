use super::{BufferError, Capacity, WriteOutcome};

/// Common contract implemented by every buffer variant.
///
/// FIFO order is preserved across writes and reads. "Empty" is an ordinary
/// condition reported as `Ok(None)`, never an error. After [`dispose`] every
/// subsequent write or read fails with [`BufferError::Disposed`];
/// [`clear`] and [`dispose`] themselves are idempotent.
///
/// [`dispose`]: BufferBackend::dispose
/// [`clear`]: BufferBackend::clear
pub trait BufferBackend<T> {
  /// Appends an item, applying the configured overflow policy at capacity.
  ///
  /// # Errors
  ///
  /// Returns [`BufferError::Full`] when the buffer is at capacity under the
  /// `Fixed` policy, or [`BufferError::Disposed`] after disposal.
  fn write(&mut self, item: T) -> Result<WriteOutcome, BufferError<T>>;

  /// Removes and returns the oldest item, or `Ok(None)` when empty.
  ///
  /// # Errors
  ///
  /// Returns [`BufferError::Disposed`] after disposal.
  fn read(&mut self) -> Result<Option<T>, BufferError<T>>;

  /// Returns the oldest item without removing it, or `Ok(None)` when empty.
  ///
  /// # Errors
  ///
  /// Returns [`BufferError::Disposed`] after disposal.
  fn peek(&self) -> Result<Option<&T>, BufferError<T>>;

  /// Removes all items. Idempotent, and permitted after disposal.
  fn clear(&mut self);

  /// Returns the number of stored items.
  fn len(&self) -> usize;

  /// Returns the capacity limit.
  fn capacity(&self) -> Capacity;

  /// Indicates whether the buffer holds no items.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the buffer is at capacity.
  fn is_full(&self) -> bool;

  /// Releases the buffer; equivalent to [`BufferBackend::clear`] followed by
  /// permanently rejecting further writes and reads. Safe to call repeatedly.
  fn dispose(&mut self);

  /// Indicates whether the buffer has been disposed.
  fn is_disposed(&self) -> bool;
}
