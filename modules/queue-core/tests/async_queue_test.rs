use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};
use std::time::Duration;

use handoff_queue_core_rs::{
  AsyncQueue, CancellationSignal, CloseReason, FaultReason, OverflowPolicy, QueueError,
};

struct ManualToken {
  cancelled: AtomicBool,
}

impl ManualToken {
  fn new() -> Arc<Self> {
    Arc::new(Self { cancelled: AtomicBool::new(false) })
  }

  fn cancel(&self) {
    self.cancelled.store(true, Ordering::SeqCst);
  }
}

impl CancellationSignal for ManualToken {
  fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::SeqCst)
  }
}

#[tokio::test]
async fn producer_and_consumer_on_separate_tasks() {
  let queue: AsyncQueue<u64> = AsyncQueue::unbounded();

  let producer = queue.clone();
  let feed = tokio::spawn(async move {
    for value in 0..100u64 {
      producer.enqueue(value).unwrap();
      if value % 10 == 0 {
        tokio::time::sleep(Duration::from_millis(1)).await;
      }
    }
    producer.set_read_only().unwrap();
  });

  let mut received = Vec::new();
  while let Some(value) = queue.next_item().await {
    received.push(value);
  }
  feed.await.unwrap();

  assert_eq!(received, (0..100u64).collect::<Vec<_>>());
  assert!(queue.is_closed());
}

#[tokio::test]
async fn waiting_consumers_resolve_in_registration_order() {
  let queue: AsyncQueue<u32> = AsyncQueue::unbounded();

  let first = queue.dequeue();
  let second = queue.dequeue();
  let third = queue.dequeue();

  let producer = queue.clone();
  tokio::spawn(async move {
    for value in [1u32, 2, 3] {
      producer.enqueue(value).unwrap();
    }
  });

  assert_eq!(first.await, Ok(1));
  assert_eq!(second.await, Ok(2));
  assert_eq!(third.await, Ok(3));
}

#[tokio::test]
async fn close_unblocks_consumers_across_tasks() {
  let queue: AsyncQueue<u32> = AsyncQueue::unbounded();

  let consumer = queue.clone();
  let waiter = tokio::spawn(async move { consumer.dequeue().await });

  tokio::time::sleep(Duration::from_millis(5)).await;
  assert!(queue.close());

  assert_eq!(waiter.await.unwrap(), Err(QueueError::Disconnected(CloseReason::Finished)));
  assert_eq!(queue.on_close().await, Ok(()));
}

#[tokio::test]
async fn fault_reaches_on_close_subscribers() {
  let queue: AsyncQueue<u32> = AsyncQueue::unbounded();
  let signal = queue.on_close();

  let closer = queue.clone();
  tokio::spawn(async move {
    tokio::time::sleep(Duration::from_millis(5)).await;
    closer.close_with(FaultReason::new("disk gone"));
  });

  assert_eq!(signal.await, Err(FaultReason::new("disk gone")));
  assert!(queue.is_closed());
}

#[tokio::test]
async fn cancellation_diverts_the_item_to_the_next_waiter() {
  let queue: AsyncQueue<u32> = AsyncQueue::unbounded();
  let token = ManualToken::new();

  let stale = queue.dequeue_with(token.clone());
  let live = queue.dequeue();

  token.cancel();
  drop(stale);

  queue.enqueue(41).unwrap();
  assert_eq!(live.await, Ok(41));
}

#[tokio::test]
async fn bounded_queue_sheds_load_under_drop_oldest() {
  let queue = AsyncQueue::bounded(4, OverflowPolicy::DropOldest).unwrap();

  for value in 0..32u32 {
    queue.enqueue(value).unwrap();
  }
  queue.set_read_only().unwrap();

  let mut tail = Vec::new();
  while let Some(value) = queue.next_item().await {
    tail.push(value);
  }
  assert_eq!(tail, vec![28, 29, 30, 31]);
}
