use core::num::NonZeroUsize;

use super::{MailboxCapacity, MailboxOverflowStrategy};

/// Capacity and overflow behaviour of a mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MailboxPolicy {
  capacity: MailboxCapacity,
  overflow: MailboxOverflowStrategy,
}

impl MailboxPolicy {
  /// Unbounded mailbox.
  #[must_use]
  pub const fn unbounded() -> Self {
    Self { capacity: MailboxCapacity::Unbounded, overflow: MailboxOverflowStrategy::DropNewest }
  }

  /// Bounded mailbox with the given overflow behaviour.
  #[must_use]
  pub const fn bounded(capacity: NonZeroUsize, overflow: MailboxOverflowStrategy) -> Self {
    Self { capacity: MailboxCapacity::Bounded { capacity }, overflow }
  }

  /// Queue capacity.
  #[must_use]
  pub const fn capacity(&self) -> MailboxCapacity {
    self.capacity
  }

  /// Overflow behaviour; only relevant for bounded mailboxes.
  #[must_use]
  pub const fn overflow(&self) -> MailboxOverflowStrategy {
    self.overflow
  }

  /// Returns `true` if senders may block on this mailbox.
  #[must_use]
  pub const fn requires_blocking(&self) -> bool {
    matches!(
      (self.capacity, self.overflow),
      (MailboxCapacity::Bounded { .. }, MailboxOverflowStrategy::Block { .. })
    )
  }
}
