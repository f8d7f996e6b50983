use alloc::{collections::VecDeque, vec::Vec};

use portable_atomic::{AtomicU64, Ordering};
use tessera_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{
  EventStreamEvent, EventStreamSubscriber, EventStreamSubscription,
  event_stream_subscriber_entry::EventStreamSubscriberEntry,
};

#[cfg(test)]
mod tests;

/// Number of events replayed to late subscribers when nothing else is configured.
pub const DEFAULT_REPLAY_CAPACITY: usize = 256;

/// In-memory event bus replaying its most recent events to new subscribers.
pub struct EventStream {
  subscribers: SpinSyncMutex<Vec<EventStreamSubscriberEntry>>,
  buffer:      SpinSyncMutex<VecDeque<EventStreamEvent>>,
  capacity:    usize,
  next_id:     AtomicU64,
}

impl EventStream {
  /// Creates a stream keeping at most `capacity` events for replay.
  #[must_use]
  pub const fn with_capacity(capacity: usize) -> Self {
    Self {
      subscribers: SpinSyncMutex::new(Vec::new()),
      buffer: SpinSyncMutex::new(VecDeque::new()),
      capacity,
      next_id: AtomicU64::new(1),
    }
  }

  /// Registers `subscriber` and replays the buffered events to it.
  #[must_use]
  pub fn subscribe(
    stream: &ArcShared<Self>,
    subscriber: &ArcShared<dyn EventStreamSubscriber>,
  ) -> EventStreamSubscription {
    let id = stream.next_id.fetch_add(1, Ordering::Relaxed);
    stream.subscribers.lock().push(EventStreamSubscriberEntry::new(id, subscriber.clone()));

    let snapshot: Vec<EventStreamEvent> = stream.buffer.lock().iter().cloned().collect();
    for event in &snapshot {
      subscriber.on_event(event);
    }
    EventStreamSubscription::new(stream.clone(), id)
  }

  /// Removes a subscriber.
  pub fn unsubscribe(&self, id: u64) {
    let mut subscribers = self.subscribers.lock();
    if let Some(position) = subscribers.iter().position(|entry| entry.id() == id) {
      subscribers.remove(position);
    }
  }

  /// Number of registered subscribers.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.subscribers.lock().len()
  }

  /// Publishes `event` to every subscriber.
  pub fn publish(&self, event: &EventStreamEvent) {
    if self.capacity > 0 {
      let mut buffer = self.buffer.lock();
      if buffer.len() == self.capacity {
        buffer.pop_front();
      }
      buffer.push_back(event.clone());
    }

    let subscribers = self.subscribers.lock().clone();
    for entry in &subscribers {
      entry.subscriber().on_event(event);
    }
  }
}

impl Default for EventStream {
  fn default() -> Self {
    Self::with_capacity(DEFAULT_REPLAY_CAPACITY)
  }
}
