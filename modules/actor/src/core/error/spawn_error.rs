use alloc::string::String;
use core::fmt;

/// Failures raised synchronously when creating an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpawnError {
  /// A live child with the same name exists.
  NameConflict(String),
  /// The requested name is empty, contains `/` or starts with the reserved `$`.
  InvalidName(String),
  /// The parent is terminating or the system has shut down.
  SystemUnavailable,
  /// The mailbox policy cannot be honoured by the selected dispatcher.
  InvalidMailboxConfig(String),
  /// No dispatcher is registered under the requested id.
  UnknownDispatcher(String),
  /// No mailbox policy is registered under the requested id.
  UnknownMailbox(String),
}

impl SpawnError {
  /// Creates a name conflict error.
  #[must_use]
  pub fn name_conflict(name: impl Into<String>) -> Self {
    Self::NameConflict(name.into())
  }

  /// Creates an invalid name error.
  #[must_use]
  pub fn invalid_name(name: impl Into<String>) -> Self {
    Self::InvalidName(name.into())
  }
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | SpawnError::NameConflict(name) => write!(f, "actor name `{name}` is already taken"),
      | SpawnError::InvalidName(name) => write!(f, "actor name `{name}` is not valid"),
      | SpawnError::SystemUnavailable => f.write_str("actor system or parent is terminating"),
      | SpawnError::InvalidMailboxConfig(reason) => write!(f, "invalid mailbox configuration: {reason}"),
      | SpawnError::UnknownDispatcher(id) => write!(f, "no dispatcher registered as `{id}`"),
      | SpawnError::UnknownMailbox(id) => write!(f, "no mailbox registered as `{id}`"),
    }
  }
}

impl std::error::Error for SpawnError {}
