use super::{FaultReason, TokenBehavior};

/// Read-only view of an externally owned cancellation token.
///
/// The queue consults the signal only when it attempts to resolve a pending
/// registration (on enqueue or close); cancellation is cooperative and polled,
/// never delivered by interruption.
pub trait CancellationSignal: Send + Sync {
  /// Indicates whether the token has fired.
  fn is_cancelled(&self) -> bool;

  /// Reason reported by the token, propagated verbatim to waiters.
  fn reason(&self) -> FaultReason {
    FaultReason::cancelled()
  }

  /// Coarse behavior discriminator for the token.
  fn behavior(&self) -> TokenBehavior {
    TokenBehavior::Cancellable
  }
}
