/// Errors raised while validating buffer construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferConfigError {
  /// A capacity of zero (or effectively negative) was requested.
  ZeroCapacity,
  /// The requested capacity exceeds the fixed circular buffer's upper bound.
  /// Callers requiring more must use the growable or unbounded variant.
  CapacityExceedsMax,
  /// An overflow policy or decider was supplied together with an unbounded
  /// capacity; an unbounded buffer never overflows.
  PolicyForLimitless,
}
