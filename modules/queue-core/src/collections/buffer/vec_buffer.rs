
use alloc::collections::VecDeque;

use super::{BufferBackend, BufferConfigError, BufferError, Capacity, OverflowDecider, OverflowPolicy, WriteOutcome};

/// Growable or unbounded buffer backed by [`VecDeque`].
///
/// The unbounded variant never overflows and therefore takes no policy; the
/// capacity-limited variant applies its [`OverflowPolicy`] (or a per-value
/// [`OverflowDecider`]) once `len` reaches the limit.
pub struct VecBuffer<T> {
  items:    VecDeque<T>,
  capacity: Capacity,
  policy:   OverflowPolicy,
  decider:  Option<OverflowDecider<T>>,
  disposed: bool,
}

impl<T> VecBuffer<T> {
  /// Creates an unbounded buffer.
  #[must_use]
  pub fn unbounded() -> Self {
    Self {
      items:    VecDeque::new(),
      capacity: Capacity::Limitless,
      policy:   OverflowPolicy::Fixed,
      decider:  None,
      disposed: false,
    }
  }

  /// Creates a buffer limited to `capacity` items under the given policy.
  ///
  /// # Errors
  ///
  /// Returns [`BufferConfigError::ZeroCapacity`] when `capacity` is zero.
  pub fn with_capacity(capacity: usize, policy: OverflowPolicy) -> Result<Self, BufferConfigError> {
    if capacity == 0 {
      return Err(BufferConfigError::ZeroCapacity);
    }
    Ok(Self {
      items: VecDeque::with_capacity(capacity),
      capacity: Capacity::Limited(capacity),
      policy,
      decider: None,
      disposed: false,
    })
  }

  /// Creates a capacity-limited buffer whose overflow policy is chosen per
  /// value by `decider`.
  ///
  /// # Errors
  ///
  /// Returns [`BufferConfigError::ZeroCapacity`] when `capacity` is zero.
  pub fn with_decider(capacity: usize, decider: OverflowDecider<T>) -> Result<Self, BufferConfigError> {
    let mut buffer = Self::with_capacity(capacity, OverflowPolicy::Fixed)?;
    buffer.decider = Some(decider);
    Ok(buffer)
  }

  fn policy_for(&self, item: &T) -> OverflowPolicy {
    self.decider.as_ref().map_or(self.policy, |decider| decider(item))
  }
}

impl<T> BufferBackend<T> for VecBuffer<T> {
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
          let _ = self.items.pop_front();
          self.items.push_back(item);
          Ok(WriteOutcome::DroppedOldest)
        },
      };
    }

    self.items.push_back(item);
    Ok(WriteOutcome::Stored)
  }

  fn read(&mut self) -> Result<Option<T>, BufferError<T>> {
    if self.disposed {
      return Err(BufferError::Disposed);
    }
    Ok(self.items.pop_front())
  }

  fn peek(&self) -> Result<Option<&T>, BufferError<T>> {
    if self.disposed {
      return Err(BufferError::Disposed);
    }
    Ok(self.items.front())
  }

  fn clear(&mut self) {
    self.items.clear();
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  fn capacity(&self) -> Capacity {
    self.capacity
  }

  fn is_full(&self) -> bool {
    match self.capacity {
      | Capacity::Limitless => false,
      | Capacity::Limited(limit) => self.items.len() >= limit,
    }
  }

  fn dispose(&mut self) {
    self.items.clear();
    self.disposed = true;
  }

  fn is_disposed(&self) -> bool {
    self.disposed
  }
}
