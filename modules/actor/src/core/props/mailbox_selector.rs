use alloc::string::String;

use crate::core::dispatch::mailbox::MailboxPolicy;

/// Mailbox requested by a [`Props`](super::Props).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MailboxSelector {
  /// Unbounded mailbox.
  #[default]
  Default,
  /// Explicit policy.
  Policy(MailboxPolicy),
  /// Policy registered in the system configuration under this id.
  Id(String),
}
