/// Coarse discriminator describing what a cancellation token can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenBehavior {
  /// The token never cancels; registrations need not track it.
  Inert,
  /// The token carries deadline or manual-cancel behavior.
  Cancellable,
}

impl TokenBehavior {
  /// Indicates whether the token can ever report cancellation.
  #[must_use]
  pub const fn is_cancellable(self) -> bool {
    matches!(self, Self::Cancellable)
  }
}
