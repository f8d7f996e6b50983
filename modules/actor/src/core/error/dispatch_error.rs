use alloc::string::String;
use core::fmt;

/// Failures reported by a dispatch executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
  /// The executor refused the task.
  Rejected(String),
  /// The executor has been shut down.
  Shutdown,
}

impl fmt::Display for DispatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | DispatchError::Rejected(reason) => write!(f, "dispatch rejected: {reason}"),
      | DispatchError::Shutdown => f.write_str("dispatch executor is shut down"),
    }
  }
}

impl std::error::Error for DispatchError {}
