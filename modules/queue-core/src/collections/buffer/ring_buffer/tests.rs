use alloc::boxed::Box;

use super::{RingBuffer, MAX_CAPACITY};
use crate::collections::buffer::{BufferBackend, BufferConfigError, BufferError, Capacity, OverflowPolicy, WriteOutcome};

#[test]
fn capacity_bounds_are_validated() {
  assert!(matches!(
    RingBuffer::<i32>::with_capacity(0, OverflowPolicy::Fixed),
    Err(BufferConfigError::ZeroCapacity)
  ));
  assert!(matches!(
    RingBuffer::<i32>::with_capacity(MAX_CAPACITY + 1, OverflowPolicy::Fixed),
    Err(BufferConfigError::CapacityExceedsMax)
  ));
  assert!(RingBuffer::<i32>::with_capacity(MAX_CAPACITY, OverflowPolicy::Fixed).is_ok());
}

#[test]
fn write_and_read_wrap_around() {
  let mut buffer = RingBuffer::with_capacity(3, OverflowPolicy::Fixed).unwrap();

  for round in 0..5 {
    let base = round * 10;
    assert_eq!(buffer.write(base), Ok(WriteOutcome::Stored));
    assert_eq!(buffer.write(base + 1), Ok(WriteOutcome::Stored));
    assert_eq!(buffer.read(), Ok(Some(base)));
    assert_eq!(buffer.read(), Ok(Some(base + 1)));
  }
  assert!(buffer.is_empty());
}

#[test]
fn fixed_policy_exerts_backpressure() {
  let mut buffer = RingBuffer::with_capacity(2, OverflowPolicy::Fixed).unwrap();

  assert_eq!(buffer.write(1), Ok(WriteOutcome::Stored));
  assert_eq!(buffer.write(2), Ok(WriteOutcome::Stored));
  assert!(buffer.is_full());
  assert_eq!(buffer.write(3), Err(BufferError::Full(3)));
}

#[test]
fn drop_oldest_preserves_fifo_of_survivors() {
  let mut buffer = RingBuffer::with_capacity(2, OverflowPolicy::DropOldest).unwrap();

  assert_eq!(buffer.write(1), Ok(WriteOutcome::Stored));
  assert_eq!(buffer.write(2), Ok(WriteOutcome::Stored));
  assert_eq!(buffer.write(3), Ok(WriteOutcome::DroppedOldest));
  assert_eq!(buffer.peek(), Ok(Some(&2)));
  assert_eq!(buffer.read(), Ok(Some(2)));
  assert_eq!(buffer.read(), Ok(Some(3)));
  assert_eq!(buffer.read(), Ok(None));
}

#[test]
fn decider_chooses_policy_per_value() {
  let decider = Box::new(|item: &i32| if *item < 0 { OverflowPolicy::DropNewest } else { OverflowPolicy::Fixed });
  let mut buffer = RingBuffer::with_decider(1, decider).unwrap();

  assert_eq!(buffer.write(7), Ok(WriteOutcome::Stored));
  assert_eq!(buffer.write(-1), Ok(WriteOutcome::DroppedNewest));
  assert_eq!(buffer.write(8), Err(BufferError::Full(8)));
  assert_eq!(buffer.read(), Ok(Some(7)));
}

#[test]
fn reports_limited_capacity() {
  let buffer = RingBuffer::<i32>::with_capacity(4, OverflowPolicy::Fixed).unwrap();
  assert_eq!(buffer.capacity(), Capacity::Limited(4));
}

#[test]
fn dispose_clears_and_poisons() {
  let mut buffer = RingBuffer::with_capacity(2, OverflowPolicy::Fixed).unwrap();
  assert_eq!(buffer.write(1), Ok(WriteOutcome::Stored));

  buffer.dispose();
  assert!(buffer.is_disposed());
  assert_eq!(buffer.len(), 0);
  assert_eq!(buffer.write(2), Err(BufferError::Disposed));
  assert_eq!(buffer.read(), Err(BufferError::Disposed));

  buffer.clear();
  buffer.dispose();
}
