/// Observable queue events for which listeners can be registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueEvent {
  /// An item was enqueued (handed off or buffered).
  Enqueue,
  /// An item was taken from the buffer by a dequeue.
  Dequeue,
}
