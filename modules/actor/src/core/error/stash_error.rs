use core::fmt;

use super::ActorError;

/// Failures raised by stash operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StashError {
  /// No message is being processed, e.g. inside the start hook.
  Initialization,
  /// The stash already holds its configured capacity.
  CapacityExceeded {
    /// Configured capacity.
    capacity: usize,
  },
  /// The current message has already been stashed.
  AlreadyStashed,
}

impl fmt::Display for StashError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StashError::Initialization => f.write_str("cannot stash outside of message processing"),
      | StashError::CapacityExceeded { capacity } => write!(f, "stash capacity of {capacity} exceeded"),
      | StashError::AlreadyStashed => f.write_str("current message is already stashed"),
    }
  }
}

impl std::error::Error for StashError {}

impl From<StashError> for ActorError {
  fn from(error: StashError) -> Self {
    ActorError::from_cause(error)
  }
}
