//! Unbounded strict-FIFO queue with a one-shot drain adapter.


mod drain;

pub use drain::Drain;

use alloc::collections::VecDeque;

/// Unbounded first-in-first-out queue with O(1) offer, poll and peek.
///
/// Presence is expressed through `Option`, so an "absent" element is
/// unrepresentable and empty never needs a sentinel value. The async queue
/// uses this type internally to hold pending consumer registrations.
pub struct FifoQueue<T> {
  items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub fn new() -> Self {
    Self { items: VecDeque::new() }
  }

  /// Appends an element to the tail of the queue.
  pub fn offer(&mut self, item: T) {
    self.items.push_back(item);
  }

  /// Removes and returns the element at the head of the queue.
  pub fn poll(&mut self) -> Option<T> {
    self.items.pop_front()
  }

  /// Returns the element at the head of the queue without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.items.front()
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Removes all elements.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Atomically empties the queue into a one-shot [`Drain`] adapter. The
  /// queue is empty as soon as this returns; the adapter owns the elements.
  pub fn drain(&mut self) -> Drain<T> {
    Drain::new(core::mem::take(&mut self.items))
  }
}

impl<T> Default for FifoQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}
