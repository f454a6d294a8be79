use crate::collections::buffer::WriteOutcome;

/// Outcome produced by a successful enqueue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnqueueOutcome {
  /// The item satisfied a waiting consumer directly, bypassing the buffer.
  HandedOff,
  /// The item was stored in the buffer.
  Buffered,
  /// The incoming item was discarded by the `DropNewest` overflow policy.
  DroppedNewest,
  /// The oldest buffered item was evicted to make room for the incoming one.
  DroppedOldest,
}

impl From<WriteOutcome> for EnqueueOutcome {
  fn from(outcome: WriteOutcome) -> Self {
    match outcome {
      | WriteOutcome::Stored => Self::Buffered,
      | WriteOutcome::DroppedNewest => Self::DroppedNewest,
      | WriteOutcome::DroppedOldest => Self::DroppedOldest,
    }
  }
}

impl From<&EnqueueOutcome> for &'static str {
  fn from(outcome: &EnqueueOutcome) -> Self {
    match outcome {
      | EnqueueOutcome::HandedOff => "hand_off",
      | EnqueueOutcome::Buffered => "buffer",
      | EnqueueOutcome::DroppedNewest => "drop_newest",
      | EnqueueOutcome::DroppedOldest => "drop_oldest",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn write_outcomes_map_onto_enqueue_outcomes() {
    assert_eq!(EnqueueOutcome::from(WriteOutcome::Stored), EnqueueOutcome::Buffered);
    assert_eq!(EnqueueOutcome::from(WriteOutcome::DroppedNewest), EnqueueOutcome::DroppedNewest);
    assert_eq!(EnqueueOutcome::from(WriteOutcome::DroppedOldest), EnqueueOutcome::DroppedOldest);
  }

  #[test]
  fn outcome_descriptions() {
    let desc: &str = (&EnqueueOutcome::HandedOff).into();
    assert_eq!(desc, "hand_off");
    let desc: &str = (&EnqueueOutcome::Buffered).into();
    assert_eq!(desc, "buffer");
  }
}
