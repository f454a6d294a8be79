//! Cancellation seam and shared error payloads.
//!
//! The queue never constructs cancellation tokens; it only reads them through
//! [`CancellationSignal`]. Embedding applications bring their own token type
//! (with deadline or manual-cancel behavior) and expose it through this trait.

mod cancellation_signal;
mod fault_reason;
mod never_cancelled;
mod token_behavior;

pub use cancellation_signal::CancellationSignal;
pub use fault_reason::FaultReason;
pub use never_cancelled::NeverCancelled;
pub use token_behavior::TokenBehavior;
