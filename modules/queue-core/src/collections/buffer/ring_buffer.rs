#[cfg(test)]
mod tests;

use alloc::vec::Vec;

use super::{BufferBackend, BufferConfigError, BufferError, Capacity, OverflowDecider, OverflowPolicy, WriteOutcome};

/// Upper bound on the capacity of a fixed circular buffer. Callers requiring
/// more must use [`super::VecBuffer`].
pub const MAX_CAPACITY: usize = 1 << 16;

/// Fixed-capacity circular buffer over a preallocated slot array.
pub struct RingBuffer<T> {
  slots:    Vec<Option<T>>,
  head:     usize,
  count:    usize,
  policy:   OverflowPolicy,
  decider:  Option<OverflowDecider<T>>,
  disposed: bool,
}

impl<T> RingBuffer<T> {
  /// Creates a circular buffer holding at most `capacity` items.
  ///
  /// # Errors
  ///
  /// Returns [`BufferConfigError::ZeroCapacity`] when `capacity` is zero and
  /// [`BufferConfigError::CapacityExceedsMax`] when it exceeds
  /// [`MAX_CAPACITY`].
  pub fn with_capacity(capacity: usize, policy: OverflowPolicy) -> Result<Self, BufferConfigError> {
    if capacity == 0 {
      return Err(BufferConfigError::ZeroCapacity);
    }
    if capacity > MAX_CAPACITY {
      return Err(BufferConfigError::CapacityExceedsMax);
    }

    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    Ok(Self { slots, head: 0, count: 0, policy, decider: None, disposed: false })
  }

  /// Creates a circular buffer whose overflow policy is chosen per value by
  /// `decider`.
  ///
  /// # Errors
  ///
  /// Propagates the capacity validation errors of
  /// [`RingBuffer::with_capacity`].
  pub fn with_decider(capacity: usize, decider: OverflowDecider<T>) -> Result<Self, BufferConfigError> {
    let mut buffer = Self::with_capacity(capacity, OverflowPolicy::Fixed)?;
    buffer.decider = Some(decider);
    Ok(buffer)
  }

  fn policy_for(&self, item: &T) -> OverflowPolicy {
    self.decider.as_ref().map_or(self.policy, |decider| decider(item))
  }

  fn push_back(&mut self, item: T) {
    debug_assert!(self.count < self.slots.len());
    let index = (self.head + self.count) % self.slots.len();
    self.slots[index] = Some(item);
    self.count += 1;
  }

  fn pop_front(&mut self) -> Option<T> {
    if self.count == 0 {
      return None;
    }
    let item = self.slots[self.head].take();
    self.head = (self.head + 1) % self.slots.len();
    self.count -= 1;
    item
  }
}

impl<T> BufferBackend<T> for RingBuffer<T> {
  fn write(&mut self, item: T) -> Result<WriteOutcome, BufferError<T>> {
    if self.disposed {
      return Err(BufferError::Disposed);
    }

    if self.is_full() {
      return match self.policy_for(&item) {
        | OverflowPolicy::Fixed => Err(BufferError::Full(item)),
        | OverflowPolicy::DropNewest => {
          drop(item);
          Ok(WriteOutcome::DroppedNewest)
        },
        | OverflowPolicy::DropOldest => {
          let _ = self.pop_front();
          self.push_back(item);
          Ok(WriteOutcome::DroppedOldest)
        },
      };
    }

    self.push_back(item);
    Ok(WriteOutcome::Stored)
  }

  fn read(&mut self) -> Result<Option<T>, BufferError<T>> {
    if self.disposed {
      return Err(BufferError::Disposed);
    }
    Ok(self.pop_front())
  }

  fn peek(&self) -> Result<Option<&T>, BufferError<T>> {
    if self.disposed {
      return Err(BufferError::Disposed);
    }
    if self.count == 0 {
      return Ok(None);
    }
    Ok(self.slots[self.head].as_ref())
  }

  fn clear(&mut self) {
    for slot in &mut self.slots {
      slot.take();
    }
    self.head = 0;
    self.count = 0;
  }

  fn len(&self) -> usize {
    self.count
  }

  fn capacity(&self) -> Capacity {
    Capacity::Limited(self.slots.len())
  }

  fn is_full(&self) -> bool {
    self.count == self.slots.len()
  }

  fn dispose(&mut self) {
    self.clear();
    self.disposed = true;
  }

  fn is_disposed(&self) -> bool {
    self.disposed
  }
}
