//! Asynchronous, closable hand-off queue.
//!
//! [`AsyncQueue`] couples a bounded (or unbounded) buffer, a FIFO registry of
//! waiting consumers, a `ReadWrite -> ReadOnly -> Closed` lifecycle and
//! cooperative cancellation. Producers enqueue; an item is handed directly to
//! the oldest live waiting consumer when one exists, bypassing the buffer,
//! and buffered otherwise. Consumers dequeue; an item is taken from the
//! buffer when available, otherwise a pending registration is recorded and
//! satisfied by a later enqueue.

mod async_queue;
mod close_reason;
mod dequeue_future;
mod enqueue_outcome;
mod listener;
mod pending_consumer;
mod queue_config;
mod queue_core;
mod queue_error;
mod queue_event;
mod queue_state;

pub use async_queue::AsyncQueue;
pub use close_reason::CloseReason;
pub use dequeue_future::DequeueFuture;
pub use enqueue_outcome::EnqueueOutcome;
pub use listener::ListenerFn;
pub use queue_config::QueueConfig;
pub use queue_error::QueueError;
pub use queue_event::QueueEvent;
pub use queue_state::QueueState;

use crate::{concurrent::DeferredFuture, sync::FaultReason};

/// Future returned by [`AsyncQueue::on_close`].
///
/// Resolves with `Ok(())` on orderly close (explicit close or read-only
/// exhaustion) and with `Err(fault)` when an application fault was injected
/// through [`AsyncQueue::close_with`].
pub type CloseFuture = DeferredFuture<(), FaultReason>;
