use crate::core::messaging::AnyMessage;

/// Successful result of a user-message enqueue.
#[derive(Debug)]
pub enum EnqueueOutcome {
  /// The message was appended.
  Enqueued,
  /// The message was appended after evicting the oldest queued message.
  Evicted(AnyMessage),
}
