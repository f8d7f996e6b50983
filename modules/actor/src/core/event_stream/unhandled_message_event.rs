use core::time::Duration;

use crate::core::{actor_prim::Pid, messaging::AnyMessage};

/// A message the actor's current behavior did not handle.
#[derive(Clone, Debug)]
pub struct UnhandledMessageEvent {
  actor:     Pid,
  message:   AnyMessage,
  timestamp: Duration,
}

impl UnhandledMessageEvent {
  /// Creates the event.
  #[must_use]
  pub const fn new(actor: Pid, message: AnyMessage, timestamp: Duration) -> Self {
    Self { actor, message, timestamp }
  }

  /// Actor that received the message.
  #[must_use]
  pub const fn actor(&self) -> Pid {
    self.actor
  }

  /// The unhandled message.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    &self.message
  }

  /// Monotonic timestamp.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}
