use alloc::borrow::Cow;
use core::fmt;

/// Application-chosen failure payload.
///
/// Carried verbatim by cancellation failures and by injected close errors, so
/// that callers observe the reason they supplied rather than a wrapped copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReason {
  message: Cow<'static, str>,
}

impl FaultReason {
  /// Creates a reason from the provided message.
  #[must_use]
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into() }
  }

  /// Default reason reported by tokens that cancel without a message.
  #[must_use]
  pub const fn cancelled() -> Self {
    Self { message: Cow::Borrowed("cancelled") }
  }

  /// Returns the reason message.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for FaultReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fault_reason_exposes_message() {
    let reason = FaultReason::new("boom");
    assert_eq!(reason.message(), "boom");
    assert_eq!(alloc::format!("{}", reason), "boom");
  }

  #[test]
  fn default_cancelled_reason() {
    assert_eq!(FaultReason::cancelled().message(), "cancelled");
  }
}
