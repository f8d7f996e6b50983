use crossbeam_queue::{ArrayQueue, SegQueue};

use super::{MailboxCapacity, MailboxPolicy};
use crate::core::messaging::AnyMessage;

/// Lock-free user-message storage selected by the mailbox capacity.
pub(crate) enum UserQueue {
  Unbounded(SegQueue<AnyMessage>),
  Bounded(ArrayQueue<AnyMessage>),
}

impl UserQueue {
  pub(crate) fn for_policy(policy: &MailboxPolicy) -> Self {
    match policy.capacity() {
      | MailboxCapacity::Unbounded => Self::Unbounded(SegQueue::new()),
      | MailboxCapacity::Bounded { capacity } => Self::Bounded(ArrayQueue::new(capacity.get())),
    }
  }

  pub(crate) fn pop(&self) -> Option<AnyMessage> {
    match self {
      | Self::Unbounded(queue) => queue.pop(),
      | Self::Bounded(queue) => queue.pop(),
    }
  }

  pub(crate) fn len(&self) -> usize {
    match self {
      | Self::Unbounded(queue) => queue.len(),
      | Self::Bounded(queue) => queue.len(),
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    match self {
      | Self::Unbounded(queue) => queue.is_empty(),
      | Self::Bounded(queue) => queue.is_empty(),
    }
  }
}
