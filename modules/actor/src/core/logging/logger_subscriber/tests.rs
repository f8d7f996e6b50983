use alloc::{string::String, vec::Vec};
use core::time::Duration;

use tessera_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::LoggerSubscriber;
use crate::core::{
  actor_prim::Pid,
  event_stream::{EventStream, EventStreamEvent, EventStreamSubscriber},
  logging::{LogEvent, LogLevel, LoggerWriter},
};

#[derive(Default)]
struct RecordingWriter {
  events: SpinSyncMutex<Vec<LogEvent>>,
}

impl LoggerWriter for RecordingWriter {
  fn write(&self, event: &LogEvent) {
    self.events.lock().push(event.clone());
  }
}

#[test]
fn forwards_events_at_or_above_threshold() {
  let stream = ArcShared::new(EventStream::default());
  let writer = ArcShared::new(RecordingWriter::default());
  let subscriber = ArcShared::new(LoggerSubscriber::new(
    LogLevel::Info,
    writer.clone().into_dyn(|writer| writer as &dyn LoggerWriter),
  ))
  .into_dyn(|subscriber| subscriber as &dyn EventStreamSubscriber);
  let _subscription = EventStream::subscribe(&stream, &subscriber);

  stream.publish(&EventStreamEvent::Log(LogEvent::new(
    LogLevel::Debug,
    String::from("debug message"),
    Duration::from_millis(1),
    None,
  )));
  stream.publish(&EventStreamEvent::Log(LogEvent::new(
    LogLevel::Warn,
    String::from("warn message"),
    Duration::from_millis(2),
    Some(Pid::new(7, 1)),
  )));

  let events = writer.events.lock().clone();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].message(), "warn message");
  assert_eq!(events[0].origin(), Some(Pid::new(7, 1)));
}
