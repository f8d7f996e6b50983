use core::num::NonZeroUsize;

/// Capacity of a mailbox user queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MailboxCapacity {
  /// No upper bound.
  #[default]
  Unbounded,
  /// At most `capacity` queued user messages.
  Bounded {
    /// Maximum number of queued messages.
    capacity: NonZeroUsize,
  },
}
