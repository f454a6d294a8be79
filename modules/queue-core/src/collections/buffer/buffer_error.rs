/// Errors raised by buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError<T> {
  /// The buffer is at capacity under [`super::OverflowPolicy::Fixed`].
  /// Contains the item that was attempted to be written.
  Full(T),
  /// The buffer has been disposed and is permanently unusable.
  Disposed,
}

impl<T> BufferError<T> {
  /// Extracts the payload carried by variants that preserve the item.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Disposed => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn full_variant_preserves_item() {
    assert_eq!(BufferError::Full(42).into_item(), Some(42));
  }

  #[test]
  fn disposed_variant_carries_nothing() {
    assert_eq!(BufferError::<i32>::Disposed.into_item(), None);
  }
}
