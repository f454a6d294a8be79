use alloc::boxed::Box;

use super::OverflowPolicy;

/// Per-value overflow policy selector consulted at write time.
///
/// The decider chooses one of the closed [`OverflowPolicy`] variants for the
/// item being written; the buffer then applies that policy with an ordinary
/// match, so dynamic behavior stays bounded to policy selection.
pub type OverflowDecider<T> = Box<dyn Fn(&T) -> OverflowPolicy + Send + Sync>;
