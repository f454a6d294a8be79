use crate::sync::FaultReason;

/// Why a queue reached its terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
  /// Explicit orderly close.
  Finished,
  /// Auto-close after a read-only queue ran out of buffered items.
  Drained,
  /// Close carrying an application-injected fault.
  Faulted(FaultReason),
}

impl CloseReason {
  /// Returns the injected fault, if any.
  #[must_use]
  pub const fn fault(&self) -> Option<&FaultReason> {
    match self {
      | Self::Faulted(fault) => Some(fault),
      | Self::Finished | Self::Drained => None,
    }
  }

  /// Indicates whether the queue closed because it was drained while
  /// read-only.
  #[must_use]
  pub const fn is_drained(&self) -> bool {
    matches!(self, Self::Drained)
  }
}
