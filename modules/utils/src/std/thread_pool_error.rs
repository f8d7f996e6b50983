use alloc::string::String;
use core::fmt;

/// Errors reported by [`DedicatedThreadPool`](super::DedicatedThreadPool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadPoolError {
  /// The pool has been shut down and no longer accepts work.
  ShutDown,
  /// A worker thread could not be spawned.
  Spawn(String),
}

impl fmt::Display for ThreadPoolError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ThreadPoolError::ShutDown => write!(f, "thread pool has been shut down"),
      | ThreadPoolError::Spawn(reason) => write!(f, "failed to spawn worker thread: {reason}"),
    }
  }
}

impl std::error::Error for ThreadPoolError {}
