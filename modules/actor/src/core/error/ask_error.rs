use core::fmt;

/// Failures observed by the caller of an ask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AskError {
  /// No reply arrived before the deadline.
  Timeout,
  /// The request could not be delivered to the target.
  Undeliverable,
}

impl fmt::Display for AskError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | AskError::Timeout => f.write_str("ask timed out"),
      | AskError::Undeliverable => f.write_str("ask target is unreachable"),
    }
  }
}

impl std::error::Error for AskError {}
