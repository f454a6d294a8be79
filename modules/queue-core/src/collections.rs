//! Buffer, FIFO queue and async queue collections.

/// Bounded buffers with configurable overflow policies.
pub mod buffer;
/// Unbounded strict-FIFO queue with a one-shot drain adapter.
pub mod fifo_queue;
/// Asynchronous, closable hand-off queue.
pub mod queue;
