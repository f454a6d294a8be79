use super::{CancellationSignal, TokenBehavior};

/// Token that never cancels; the default liveness predicate for waits
/// registered without an explicit token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeverCancelled;

impl CancellationSignal for NeverCancelled {
  fn is_cancelled(&self) -> bool {
    false
  }

  fn behavior(&self) -> TokenBehavior {
    TokenBehavior::Inert
  }
}
