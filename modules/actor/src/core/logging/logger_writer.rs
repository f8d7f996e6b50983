use super::LogEvent;

/// Sink receiving log events that passed a [`LoggerSubscriber`](super::LoggerSubscriber) filter.
pub trait LoggerWriter: Send + Sync {
  /// Writes one event.
  fn write(&self, event: &LogEvent);
}
