use super::UnhandledMessageEvent;
use crate::core::{dead_letter::DeadLetterEntry, lifecycle::LifecycleEvent, logging::LogEvent};

/// Event published on the event stream.
#[derive(Clone, Debug)]
pub enum EventStreamEvent {
  /// Actor lifecycle transition.
  Lifecycle(LifecycleEvent),
  /// Undeliverable message.
  DeadLetter(DeadLetterEntry),
  /// Runtime log record.
  Log(LogEvent),
  /// Message no behavior handled.
  UnhandledMessage(UnhandledMessageEvent),
}
