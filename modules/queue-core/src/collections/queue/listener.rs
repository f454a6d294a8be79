use alloc::{sync::Arc, vec::Vec};

/// Callback registered for a queue event.
pub type ListenerFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

fn same_callback<T>(a: &ListenerFn<T>, b: &ListenerFn<T>) -> bool {
  core::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>())
}

struct ListenerEntry<T> {
  callback: ListenerFn<T>,
  once:     bool,
}

/// Ordered list of (callback, one-shot flag) registrations.
///
/// Re-registering a callback replaces its entry in place rather than
/// duplicating it; dispatch order is most-recently-registered first, with
/// one-shot entries removed before invocation.
pub(crate) struct ListenerList<T> {
  entries: Vec<ListenerEntry<T>>,
}

impl<T> ListenerList<T> {
  pub(crate) const fn new() -> Self {
    Self { entries: Vec::new() }
  }

  pub(crate) fn insert(&mut self, callback: ListenerFn<T>, once: bool) {
    if let Some(entry) = self.entries.iter_mut().find(|entry| same_callback(&entry.callback, &callback)) {
      entry.once = once;
      return;
    }
    self.entries.push(ListenerEntry { callback, once });
  }

  pub(crate) fn remove(&mut self, callback: &ListenerFn<T>) -> bool {
    let before = self.entries.len();
    self.entries.retain(|entry| !same_callback(&entry.callback, callback));
    self.entries.len() != before
  }

  pub(crate) fn clear(&mut self) {
    self.entries.clear();
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns the callbacks to fire, newest registration first, removing
  /// one-shot entries before they are invoked so a re-entrant dispatch can
  /// never fire them twice.
  pub(crate) fn snapshot(&mut self) -> Vec<ListenerFn<T>> {
    let fired: Vec<_> = self.entries.iter().rev().map(|entry| entry.callback.clone()).collect();
    self.entries.retain(|entry| !entry.once);
    fired
  }
}

#[cfg(test)]
mod tests {
  use alloc::{sync::Arc, vec::Vec};

  use super::ListenerList;

  #[test]
  fn snapshot_is_newest_first() {
    let mut list: ListenerList<i32> = ListenerList::new();
    let first: super::ListenerFn<i32> = Arc::new(|_| {});
    let second: super::ListenerFn<i32> = Arc::new(|_| {});

    list.insert(first.clone(), false);
    list.insert(second.clone(), false);

    let fired = list.snapshot();
    assert_eq!(fired.len(), 2);
    assert!(super::same_callback(&fired[0], &second));
    assert!(super::same_callback(&fired[1], &first));
  }

  #[test]
  fn reregistering_replaces_in_place() {
    let mut list: ListenerList<i32> = ListenerList::new();
    let callback: super::ListenerFn<i32> = Arc::new(|_| {});

    list.insert(callback.clone(), false);
    list.insert(callback.clone(), true);

    let fired = list.snapshot();
    assert_eq!(fired.len(), 1);
    assert!(list.is_empty());
  }

  #[test]
  fn one_shot_entries_are_removed_before_firing() {
    let mut list: ListenerList<i32> = ListenerList::new();
    let once: super::ListenerFn<i32> = Arc::new(|_| {});
    let durable: super::ListenerFn<i32> = Arc::new(|_| {});

    list.insert(once.clone(), true);
    list.insert(durable.clone(), false);

    let first_round = list.snapshot();
    assert_eq!(first_round.len(), 2);

    let second_round = list.snapshot();
    assert_eq!(second_round.len(), 1);
    assert!(super::same_callback(&second_round[0], &durable));
  }

  #[test]
  fn remove_detaches_the_callback() {
    let mut list: ListenerList<i32> = ListenerList::new();
    let callback: super::ListenerFn<i32> = Arc::new(|_| {});

    list.insert(callback.clone(), false);
    assert!(list.remove(&callback));
    assert!(!list.remove(&callback));
    assert!(list.snapshot().is_empty());
    let _: Vec<_> = list.snapshot();
  }
}
