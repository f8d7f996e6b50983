use tessera_utils_rs::core::sync::ArcShared;

use super::{LogLevel, LoggerWriter};
use crate::core::event_stream::{EventStreamEvent, EventStreamSubscriber};

#[cfg(test)]
mod tests;

/// Event-stream subscriber forwarding log events at or above a level to a writer.
pub struct LoggerSubscriber {
  level:  LogLevel,
  writer: ArcShared<dyn LoggerWriter>,
}

impl LoggerSubscriber {
  /// Creates a subscriber.
  #[must_use]
  pub const fn new(level: LogLevel, writer: ArcShared<dyn LoggerWriter>) -> Self {
    Self { level, writer }
  }

  /// Minimum forwarded level.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }
}

impl EventStreamSubscriber for LoggerSubscriber {
  fn on_event(&self, event: &EventStreamEvent) {
    if let EventStreamEvent::Log(log) = event {
      if log.level() >= self.level {
        self.writer.write(log);
      }
    }
  }
}
