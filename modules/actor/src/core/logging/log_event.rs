use alloc::string::String;
use core::time::Duration;

use super::LogLevel;
use crate::core::actor_prim::Pid;

/// Structured log record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
  level:     LogLevel,
  message:   String,
  timestamp: Duration,
  origin:    Option<Pid>,
}

impl LogEvent {
  /// Creates a log event.
  #[must_use]
  pub const fn new(level: LogLevel, message: String, timestamp: Duration, origin: Option<Pid>) -> Self {
    Self { level, message, timestamp, origin }
  }

  /// Severity.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }

  /// Message text.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Monotonic timestamp.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }

  /// Actor that emitted the event, if any.
  #[must_use]
  pub const fn origin(&self) -> Option<Pid> {
    self.origin
  }
}
