use alloc::{borrow::Cow, string::ToString};
use core::{any::Any, fmt};

use super::ActorErrorReason;

#[cfg(test)]
mod tests;

/// Failure reported by actor code.
///
/// The default supervisor strategy restarts on [`ActorError::Recoverable`] and stops on
/// [`ActorError::Fatal`]; custom deciders may inspect the typed cause instead.
#[derive(Clone, Debug, PartialEq)]
pub enum ActorError {
  /// Failure the actor may recover from.
  Recoverable(ActorErrorReason),
  /// Failure that leaves no valid state to continue from.
  Fatal(ActorErrorReason),
}

impl ActorError {
  /// Creates a recoverable error.
  #[must_use]
  pub fn recoverable(message: impl Into<Cow<'static, str>>) -> Self {
    Self::Recoverable(ActorErrorReason::new(message))
  }

  /// Creates a fatal error.
  #[must_use]
  pub fn fatal(message: impl Into<Cow<'static, str>>) -> Self {
    Self::Fatal(ActorErrorReason::new(message))
  }

  /// Wraps a typed error as a recoverable failure, keeping it as the cause.
  #[must_use]
  pub fn from_cause<E>(cause: E) -> Self
  where
    E: fmt::Display + Any + Send + Sync, {
    Self::Recoverable(ActorErrorReason::with_cause(cause.to_string(), cause))
  }

  /// Wraps a typed error as a fatal failure, keeping it as the cause.
  #[must_use]
  pub fn fatal_from_cause<E>(cause: E) -> Self
  where
    E: fmt::Display + Any + Send + Sync, {
    Self::Fatal(ActorErrorReason::with_cause(cause.to_string(), cause))
  }

  /// Returns the failure reason.
  #[must_use]
  pub const fn reason(&self) -> &ActorErrorReason {
    match self {
      | ActorError::Recoverable(reason) | ActorError::Fatal(reason) => reason,
    }
  }

  /// Returns `true` for recoverable failures.
  #[must_use]
  pub const fn is_recoverable(&self) -> bool {
    matches!(self, ActorError::Recoverable(_))
  }

  /// Returns `true` for fatal failures.
  #[must_use]
  pub const fn is_fatal(&self) -> bool {
    matches!(self, ActorError::Fatal(_))
  }

  /// Returns `true` if the typed cause is a `C`.
  #[must_use]
  pub fn is<C: Any>(&self) -> bool {
    self.reason().cause::<C>().is_some()
  }

  /// Returns the typed cause if it is a `C`.
  #[must_use]
  pub fn cause<C: Any>(&self) -> Option<&C> {
    self.reason().cause::<C>()
  }
}

impl fmt::Display for ActorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ActorError::Recoverable(reason) => write!(f, "recoverable actor error: {reason}"),
      | ActorError::Fatal(reason) => write!(f, "fatal actor error: {reason}"),
    }
  }
}

impl std::error::Error for ActorError {}
