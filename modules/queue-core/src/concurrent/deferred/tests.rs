use core::{
  future::Future,
  pin::Pin,
  ptr,
  task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
};

use super::Deferred;

fn raw_waker() -> RawWaker {
  fn clone(_: *const ()) -> RawWaker {
    raw_waker()
  }
  fn wake(_: *const ()) {}
  fn wake_by_ref(_: *const ()) {}
  fn drop(_: *const ()) {}
  static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);
  RawWaker::new(ptr::null(), &VTABLE)
}

fn noop_waker() -> Waker {
  unsafe { Waker::from_raw(raw_waker()) }
}

fn block_on<F: Future>(mut future: F) -> F::Output {
  let waker = noop_waker();
  let mut future = unsafe { Pin::new_unchecked(&mut future) };
  let mut context = Context::from_waker(&waker);

  loop {
    match future.as_mut().poll(&mut context) {
      | Poll::Ready(output) => return output,
      | Poll::Pending => continue,
    }
  }
}

#[test]
fn resolve_settles_exactly_once() {
  let deferred: Deferred<i32, &str> = Deferred::new();

  assert!(deferred.resolve(1));
  assert!(!deferred.resolve(2));
  assert!(!deferred.reject("late"));
  assert!(deferred.is_settled());
  assert_eq!(block_on(deferred.subscribe()), Ok(1));
}

#[test]
fn reject_settles_exactly_once() {
  let deferred: Deferred<i32, &str> = Deferred::new();

  assert!(deferred.reject("boom"));
  assert!(!deferred.resolve(7));
  assert_eq!(block_on(deferred.subscribe()), Err("boom"));
}

#[test]
fn subscriber_registered_before_settlement_is_woken() {
  let deferred: Deferred<i32, &str> = Deferred::new();
  let mut future = deferred.subscribe();
  let mut future = unsafe { Pin::new_unchecked(&mut future) };

  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);

  assert!(matches!(future.as_mut().poll(&mut context), Poll::Pending));
  assert!(deferred.resolve(5));
  assert_eq!(future.as_mut().poll(&mut context), Poll::Ready(Ok(5)));
}

#[test]
fn late_subscriber_observes_settled_value() {
  let deferred: Deferred<i32, &str> = Deferred::new();
  assert!(deferred.resolve(9));
  assert_eq!(block_on(deferred.subscribe()), Ok(9));
}

#[test]
fn settled_value_is_cloned_to_every_observer() {
  let deferred: Deferred<i32, &str> = Deferred::new();
  let first = deferred.subscribe();
  let second = first.clone();

  assert!(deferred.resolve(3));
  assert_eq!(block_on(first), Ok(3));
  assert_eq!(block_on(second), Ok(3));
}
