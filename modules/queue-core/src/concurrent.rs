//! Completion primitives shared by the async collections.

mod deferred;
mod deferred_future;

pub use deferred::Deferred;
pub use deferred_future::DeferredFuture;
