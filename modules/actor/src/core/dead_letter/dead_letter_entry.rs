use core::time::Duration;

use super::DeadLetterReason;
use crate::core::{actor_prim::Pid, messaging::AnyMessage};

/// One undeliverable message.
#[derive(Clone, Debug)]
pub struct DeadLetterEntry {
  message:   AnyMessage,
  reason:    DeadLetterReason,
  recipient: Option<Pid>,
  timestamp: Duration,
}

impl DeadLetterEntry {
  /// Creates an entry.
  #[must_use]
  pub const fn new(message: AnyMessage, reason: DeadLetterReason, recipient: Option<Pid>, timestamp: Duration) -> Self {
    Self { message, reason, recipient, timestamp }
  }

  /// The undelivered message.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    &self.message
  }

  /// Why delivery failed.
  #[must_use]
  pub const fn reason(&self) -> DeadLetterReason {
    self.reason
  }

  /// Intended recipient, if known.
  #[must_use]
  pub const fn recipient(&self) -> Option<Pid> {
    self.recipient
  }

  /// Monotonic timestamp.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}
