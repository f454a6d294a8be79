/// Size limit of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
  /// No limit (unbounded).
  Limitless,
  /// Limited to the specified number of elements.
  Limited(usize),
}

impl Capacity {
  /// Constant constructor for an unbounded capacity.
  #[must_use]
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  /// Constant constructor for a capacity limited to the specified size.
  #[must_use]
  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  /// Determines whether this capacity is unbounded.
  #[must_use]
  pub const fn is_limitless(&self) -> bool {
    matches!(self, Self::Limitless)
  }

  /// Gets the capacity as `usize`. Returns `usize::MAX` when unbounded.
  #[must_use]
  pub const fn to_usize(self) -> usize {
    match self {
      | Self::Limitless => usize::MAX,
      | Self::Limited(value) => value,
    }
  }
}
