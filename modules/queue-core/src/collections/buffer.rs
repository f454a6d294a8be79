//! Bounded buffers with configurable overflow policies.
//!
//! Two variants implement [`BufferBackend`]: [`VecBuffer`], a growable or
//! unbounded sequence, and [`RingBuffer`], a fixed-capacity circular buffer
//! with an explicit finite upper bound on capacity. Overflow behavior is
//! selected by [`OverflowPolicy`], optionally per value through an
//! [`OverflowDecider`].

mod buffer_backend;
mod buffer_config_error;
mod buffer_error;
mod capacity;
mod overflow_decider;
mod overflow_policy;
mod ring_buffer;
mod vec_buffer;
mod write_outcome;

pub use buffer_backend::BufferBackend;
pub use buffer_config_error::BufferConfigError;
pub use buffer_error::BufferError;
pub use capacity::Capacity;
pub use overflow_decider::OverflowDecider;
pub use overflow_policy::OverflowPolicy;
pub use ring_buffer::{RingBuffer, MAX_CAPACITY};
pub use vec_buffer::VecBuffer;
pub use write_outcome::WriteOutcome;
