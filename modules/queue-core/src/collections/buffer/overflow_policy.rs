/// Policy applied when a bounded buffer is written to at capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Reject the write; the buffer exerts backpressure on producers.
  #[default]
  Fixed,
  /// Silently discard the incoming item.
  DropNewest,
  /// Evict the oldest item, then append the incoming one.
  DropOldest,
}
