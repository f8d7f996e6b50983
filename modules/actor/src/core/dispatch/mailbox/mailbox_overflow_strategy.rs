use core::time::Duration;

/// Behaviour of a bounded mailbox that is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MailboxOverflowStrategy {
  /// Reject the incoming message.
  #[default]
  DropNewest,
  /// Evict the oldest queued message to make room.
  DropOldest,
  /// Block the sender until space frees up or `timeout` elapses.
  Block {
    /// Maximum time the sender waits.
    timeout: Duration,
  },
}
