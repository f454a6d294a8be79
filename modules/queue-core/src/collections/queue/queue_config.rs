use alloc::boxed::Box;

use crate::collections::buffer::{
  BufferBackend, BufferConfigError, Capacity, OverflowDecider, OverflowPolicy, RingBuffer, VecBuffer, MAX_CAPACITY,
};

/// Buffer configuration for an [`super::AsyncQueue`].
///
/// Defaults to an unbounded buffer. Requesting an unbounded capacity together
/// with an explicit policy or decider is a configuration error, since an
/// unbounded buffer never overflows. Capacities up to
/// [`MAX_CAPACITY`] use the fixed circular buffer; larger limits fall back to
/// the growable variant.
pub struct QueueConfig<T> {
  capacity: Capacity,
  policy:   Option<OverflowPolicy>,
  decider:  Option<OverflowDecider<T>>,
}

impl<T> QueueConfig<T> {
  /// Creates the default configuration: unbounded capacity, no policy.
  #[must_use]
  pub const fn new() -> Self {
    Self { capacity: Capacity::Limitless, policy: None, decider: None }
  }

  /// Limits the buffer to the specified number of items.
  #[must_use]
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = Capacity::Limited(capacity);
    self
  }

  /// Sets the overflow policy applied at capacity.
  #[must_use]
  pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
    self.policy = Some(policy);
    self
  }

  /// Sets a per-value overflow policy selector.
  #[must_use]
  pub fn with_decider(mut self, decider: OverflowDecider<T>) -> Self {
    self.decider = Some(decider);
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> Capacity {
    self.capacity
  }

  pub(crate) fn build_buffer(self) -> Result<Box<dyn BufferBackend<T> + Send>, BufferConfigError>
  where
    T: Send + 'static, {
    match self.capacity {
      | Capacity::Limitless => {
        if self.policy.is_some() || self.decider.is_some() {
          return Err(BufferConfigError::PolicyForLimitless);
        }
        Ok(Box::new(VecBuffer::unbounded()))
      },
      | Capacity::Limited(limit) => {
        let policy = self.policy.unwrap_or_default();
        match self.decider {
          | Some(decider) if limit <= MAX_CAPACITY => Ok(Box::new(RingBuffer::with_decider(limit, decider)?)),
          | Some(decider) => Ok(Box::new(VecBuffer::with_decider(limit, decider)?)),
          | None if limit <= MAX_CAPACITY => Ok(Box::new(RingBuffer::with_capacity(limit, policy)?)),
          | None => Ok(Box::new(VecBuffer::with_capacity(limit, policy)?)),
        }
      },
    }
  }
}

impl<T> Default for QueueConfig<T> {
  fn default() -> Self {
    Self::new()
  }
}
