use core::fmt;

use crate::core::messaging::AnyMessage;

/// Failures that can occur when enqueueing a user message; the message is handed back.
pub enum SendError {
  /// The bounded mailbox is full.
  Full(AnyMessage),
  /// The mailbox is closed or the actor is gone.
  Closed(AnyMessage),
  /// A blocking mailbox did not free up space in time.
  Timeout(AnyMessage),
  /// The target has no recipient behind it.
  NoRecipient(AnyMessage),
}

impl SendError {
  /// Creates a send error representing a full mailbox.
  #[must_use]
  pub const fn full(message: AnyMessage) -> Self {
    Self::Full(message)
  }

  /// Creates a send error representing a closed mailbox or a terminated actor.
  #[must_use]
  pub const fn closed(message: AnyMessage) -> Self {
    Self::Closed(message)
  }

  /// Creates a send error representing an expired blocking enqueue.
  #[must_use]
  pub const fn timeout(message: AnyMessage) -> Self {
    Self::Timeout(message)
  }

  /// Creates a send error representing a missing recipient.
  #[must_use]
  pub const fn no_recipient(message: AnyMessage) -> Self {
    Self::NoRecipient(message)
  }

  /// Returns a shared reference to the rejected message.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    match self {
      | SendError::Full(message)
      | SendError::Closed(message)
      | SendError::Timeout(message)
      | SendError::NoRecipient(message) => message,
    }
  }

  /// Consumes the error and returns the rejected message.
  #[must_use]
  pub fn into_message(self) -> AnyMessage {
    match self {
      | SendError::Full(message)
      | SendError::Closed(message)
      | SendError::Timeout(message)
      | SendError::NoRecipient(message) => message,
    }
  }
}

impl fmt::Debug for SendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | SendError::Full(_) => f.debug_tuple("Full").finish(),
      | SendError::Closed(_) => f.debug_tuple("Closed").finish(),
      | SendError::Timeout(_) => f.debug_tuple("Timeout").finish(),
      | SendError::NoRecipient(_) => f.debug_tuple("NoRecipient").finish(),
    }
  }
}

impl fmt::Display for SendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | SendError::Full(_) => f.write_str("mailbox is full"),
      | SendError::Closed(_) => f.write_str("mailbox is closed"),
      | SendError::Timeout(_) => f.write_str("timed out waiting for mailbox capacity"),
      | SendError::NoRecipient(_) => f.write_str("no recipient"),
    }
  }
}
