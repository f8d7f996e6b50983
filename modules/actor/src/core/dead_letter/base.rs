use alloc::{collections::VecDeque, format, vec::Vec};
use core::time::Duration;

use tessera_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{DeadLetterEntry, DeadLetterReason};
use crate::core::{
  actor_prim::Pid,
  error::SendError,
  event_stream::{EventStream, EventStreamEvent},
  logging::{LogEvent, LogLevel},
  messaging::AnyMessage,
};


/// Number of entries retained when nothing else is configured.
pub const DEFAULT_DEAD_LETTER_CAPACITY: usize = 256;

/// Bounded record of undeliverable messages that republishes each one on the event stream.
pub struct DeadLetter {
  entries:      SpinSyncMutex<VecDeque<DeadLetterEntry>>,
  capacity:     usize,
  event_stream: ArcShared<EventStream>,
}

impl DeadLetter {
  /// Creates a store retaining at most `capacity` entries.
  #[must_use]
  pub const fn new(event_stream: ArcShared<EventStream>, capacity: usize) -> Self {
    Self { entries: SpinSyncMutex::new(VecDeque::new()), capacity, event_stream }
  }

  /// Records an undeliverable message.
  pub fn record(&self, message: AnyMessage, reason: DeadLetterReason, recipient: Option<Pid>, timestamp: Duration) {
    let entry = DeadLetterEntry::new(message, reason, recipient, timestamp);
    if self.capacity > 0 {
      let mut entries = self.entries.lock();
      if entries.len() == self.capacity {
        entries.pop_front();
      }
      entries.push_back(entry.clone());
    }
    self.publish(&entry);
  }

  /// Records the message carried by a send failure.
  pub fn record_send_error(&self, error: SendError, recipient: Option<Pid>, timestamp: Duration) {
    let reason = DeadLetterReason::from_send_error(&error);
    self.record(error.into_message(), reason, recipient, timestamp);
  }

  /// Snapshot of the retained entries, oldest first.
  #[must_use]
  pub fn entries(&self) -> Vec<DeadLetterEntry> {
    self.entries.lock().iter().cloned().collect()
  }

  /// Number of retained entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.lock().len()
  }

  /// Returns `true` if no entries are retained.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.lock().is_empty()
  }

  fn publish(&self, entry: &DeadLetterEntry) {
    self.event_stream.publish(&EventStreamEvent::DeadLetter(entry.clone()));
    let message = match entry.recipient() {
      | Some(pid) => format!("dead letter for {pid}: {}", entry.reason()),
      | None => format!("dead letter: {}", entry.reason()),
    };
    let log = LogEvent::new(LogLevel::Debug, message, entry.timestamp(), entry.recipient());
    self.event_stream.publish(&EventStreamEvent::Log(log));
  }
}
