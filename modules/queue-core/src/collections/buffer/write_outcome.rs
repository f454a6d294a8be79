/// Outcome produced by a successful buffer write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
  /// The item was appended without any side effects.
  Stored,
  /// The incoming item was discarded by [`super::OverflowPolicy::DropNewest`].
  DroppedNewest,
  /// The oldest item was evicted to make room for the incoming one.
  DroppedOldest,
}

impl From<&WriteOutcome> for &'static str {
  fn from(outcome: &WriteOutcome) -> Self {
    match outcome {
      | WriteOutcome::Stored => "store",
      | WriteOutcome::DroppedNewest => "drop_newest",
      | WriteOutcome::DroppedOldest => "drop_oldest",
    }
  }
}
