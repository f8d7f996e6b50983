use core::fmt;

use crate::core::error::SendError;

/// Why a message ended up in dead letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeadLetterReason {
  /// The recipient does not exist or has terminated.
  RecipientUnavailable,
  /// The recipient's mailbox was closed.
  MailboxClosed,
  /// A bounded mailbox rejected or evicted the message.
  MailboxFull,
  /// The configured message verifier rejected the message.
  VerificationFailed,
  /// The message was still stashed when its actor terminated.
  StashDiscarded,
  /// Any other delivery failure, such as a blocking enqueue that timed out.
  Undelivered,
}

impl DeadLetterReason {
  /// Classifies a send failure.
  #[must_use]
  pub const fn from_send_error(error: &SendError) -> Self {
    match error {
      | SendError::Full(_) => Self::MailboxFull,
      | SendError::Closed(_) => Self::MailboxClosed,
      | SendError::NoRecipient(_) => Self::RecipientUnavailable,
      | SendError::Timeout(_) => Self::Undelivered,
    }
  }
}

impl fmt::Display for DeadLetterReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      | Self::RecipientUnavailable => "recipient unavailable",
      | Self::MailboxClosed => "mailbox closed",
      | Self::MailboxFull => "mailbox full",
      | Self::VerificationFailed => "verification failed",
      | Self::StashDiscarded => "stash discarded",
      | Self::Undelivered => "undelivered",
    };
    f.write_str(text)
  }
}
