use super::CloseReason;
use crate::sync::FaultReason;

/// Errors that occur during queue operations.
///
/// `Full`, `ReadOnly` and the closed conditions are programmatically
/// distinct; callers are expected to match on them rather than treat every
/// failure alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The buffer rejected a write at capacity under the `Fixed` policy.
  /// Contains the item that was attempted to be enqueued.
  Full(T),
  /// An enqueue was attempted after the queue became read-only. Contains the
  /// item that was attempted to be enqueued.
  ReadOnly(T),
  /// An enqueue was attempted after the queue closed. Contains the item that
  /// was attempted to be enqueued.
  Closed(T),
  /// The queue reached its terminal state; carries the close reason,
  /// including any injected fault.
  Disconnected(CloseReason),
  /// The caller's cancellation token fired; carries the token's reason
  /// verbatim.
  Cancelled(FaultReason),
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the item on
  /// failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) | Self::ReadOnly(item) | Self::Closed(item) => Some(item),
      | Self::Disconnected(_) | Self::Cancelled(_) => None,
    }
  }

  /// Returns the close reason when the queue has terminated.
  #[must_use]
  pub const fn close_reason(&self) -> Option<&CloseReason> {
    match self {
      | Self::Disconnected(reason) => Some(reason),
      | _ => None,
    }
  }
}
