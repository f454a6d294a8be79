use alloc::collections::VecDeque;

/// One-shot adapter owning the elements drained from a
/// [`super::FifoQueue`].
///
/// Supports both iteration and buffer-style [`Drain::read`]; either way the
/// elements come out in FIFO order exactly once.
pub struct Drain<T> {
  items: VecDeque<T>,
}

impl<T> Drain<T> {
  pub(super) fn new(items: VecDeque<T>) -> Self {
    Self { items }
  }

  /// Removes and returns the oldest drained element.
  pub fn read(&mut self) -> Option<T> {
    self.items.pop_front()
  }

  /// Returns the number of elements left in the adapter.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the adapter has been exhausted.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T> Iterator for Drain<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.read()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.items.len(), Some(self.items.len()))
  }
}

impl<T> ExactSizeIterator for Drain<T> {}
