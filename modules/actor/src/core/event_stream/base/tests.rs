use alloc::{string::String, vec::Vec};
use core::time::Duration;

use tessera_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::EventStream;
use crate::core::{
  event_stream::{EventStreamEvent, EventStreamSubscriber},
  logging::{LogEvent, LogLevel},
};

#[derive(Default)]
struct CollectingSubscriber {
  messages: SpinSyncMutex<Vec<String>>,
}

impl EventStreamSubscriber for CollectingSubscriber {
  fn on_event(&self, event: &EventStreamEvent) {
    if let EventStreamEvent::Log(log) = event {
      self.messages.lock().push(String::from(log.message()));
    }
  }
}

fn log(message: &str) -> EventStreamEvent {
  EventStreamEvent::Log(LogEvent::new(LogLevel::Info, String::from(message), Duration::ZERO, None))
}

fn subscriber() -> (ArcShared<CollectingSubscriber>, ArcShared<dyn EventStreamSubscriber>) {
  let concrete = ArcShared::new(CollectingSubscriber::default());
  let erased = concrete.clone().into_dyn(|subscriber| subscriber as &dyn EventStreamSubscriber);
  (concrete, erased)
}

#[test]
fn late_subscribers_receive_the_replay_buffer() {
  let stream = ArcShared::new(EventStream::with_capacity(2));
  stream.publish(&log("a"));
  stream.publish(&log("b"));
  stream.publish(&log("c"));

  let (collector, erased) = subscriber();
  let _subscription = EventStream::subscribe(&stream, &erased);
  stream.publish(&log("d"));

  assert_eq!(collector.messages.lock().clone(), ["b", "c", "d"]);
}

#[test]
fn dropping_the_subscription_unsubscribes() {
  let stream = ArcShared::new(EventStream::with_capacity(0));
  let (collector, erased) = subscriber();
  let subscription = EventStream::subscribe(&stream, &erased);
  stream.publish(&log("seen"));
  drop(subscription);
  stream.publish(&log("missed"));

  assert_eq!(stream.subscriber_count(), 0);
  assert_eq!(collector.messages.lock().clone(), ["seen"]);
}
