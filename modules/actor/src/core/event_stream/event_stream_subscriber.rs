use super::EventStreamEvent;

/// Observer registered on the event stream.
pub trait EventStreamSubscriber: Send + Sync {
  /// Receives an event. Called synchronously on the publishing thread.
  fn on_event(&self, event: &EventStreamEvent);
}
