use tessera_utils_rs::core::sync::ArcShared;

use crate::core::{
  event_stream::{EventStreamEvent, EventStreamSubscriber},
  logging::{LogEvent, LogLevel, LoggerSubscriber, LoggerWriter},
};


/// Event-stream subscriber forwarding runtime log events at or above a level to `tracing`.
///
/// Events carry the structured fields `origin` (pid value of the emitting actor) and
/// `timestamp_micros` (system clock reading).
pub struct TracingLoggerSubscriber {
  inner: LoggerSubscriber,
}

impl TracingLoggerSubscriber {
  /// Target of every emitted `tracing` event.
  pub const TARGET: &'static str = "tessera::event_stream::log";

  /// Creates a subscriber forwarding events at or above `level`.
  #[must_use]
  pub fn new(level: LogLevel) -> Self {
    let writer = ArcShared::new(TracingWriter).into_dyn(|writer| writer as &dyn LoggerWriter);
    Self { inner: LoggerSubscriber::new(level, writer) }
  }

  /// Minimum forwarded level.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.inner.level()
  }
}

impl EventStreamSubscriber for TracingLoggerSubscriber {
  fn on_event(&self, event: &EventStreamEvent) {
    self.inner.on_event(event);
  }
}

struct TracingWriter;

impl LoggerWriter for TracingWriter {
  fn write(&self, event: &LogEvent) {
    let origin = event.origin().map(|pid| pid.value());
    let timestamp_micros = u64::try_from(event.timestamp().as_micros()).unwrap_or(u64::MAX);
    let message = event.message();
    match event.level() {
      | LogLevel::Trace => {
        tracing::trace!(target: TracingLoggerSubscriber::TARGET, ?origin, timestamp_micros, "{message}");
      },
      | LogLevel::Debug => {
        tracing::debug!(target: TracingLoggerSubscriber::TARGET, ?origin, timestamp_micros, "{message}");
      },
      | LogLevel::Info => {
        tracing::info!(target: TracingLoggerSubscriber::TARGET, ?origin, timestamp_micros, "{message}");
      },
      | LogLevel::Warn => {
        tracing::warn!(target: TracingLoggerSubscriber::TARGET, ?origin, timestamp_micros, "{message}");
      },
      | LogLevel::Error => {
        tracing::error!(target: TracingLoggerSubscriber::TARGET, ?origin, timestamp_micros, "{message}");
      },
    }
  }
}
