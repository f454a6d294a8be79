#![no_std]
#![deny(missing_docs)]

//! Asynchronous, closable, backpressure-aware hand-off queue primitives.
//!
//! The crate is built from three layers, leaves first:
//!
//! - [`collections::buffer`]: bounded buffers with configurable overflow
//!   policies (growable and fixed-capacity circular variants).
//! - [`collections::fifo_queue`]: an unbounded strict-FIFO queue with a
//!   one-shot drain adapter.
//! - [`collections::queue`]: the [`AsyncQueue`] orchestrator, which couples a
//!   buffer, a registry of waiting consumers, a read-write/read-only/closed
//!   lifecycle and cooperative cancellation.
//!
//! Items flow one direction at steady state: producers enqueue, and the item
//! either satisfies a waiting consumer directly (a hand-off that bypasses the
//! buffer) or is stored; consumers dequeue, taking from the buffer or
//! registering a pending wait satisfied by a future enqueue.

extern crate alloc;

/// Buffer, FIFO queue and async queue collections.
pub mod collections;
/// Completion primitives shared by the async collections.
pub mod concurrent;
/// Cancellation seam and shared error payloads.
pub mod sync;

pub use collections::{
  buffer::{
    BufferBackend, BufferConfigError, BufferError, Capacity, OverflowDecider, OverflowPolicy, RingBuffer, VecBuffer,
    WriteOutcome,
  },
  fifo_queue::{Drain, FifoQueue},
  queue::{
    AsyncQueue, CloseFuture, CloseReason, DequeueFuture, EnqueueOutcome, ListenerFn, QueueConfig, QueueError,
    QueueEvent, QueueState,
  },
};
pub use concurrent::{Deferred, DeferredFuture};
pub use sync::{CancellationSignal, FaultReason, NeverCancelled, TokenBehavior};
