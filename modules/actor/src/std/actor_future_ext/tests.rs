use core::time::Duration;
use std::thread;

use super::ActorFutureExt;
use crate::core::futures::ActorFuture;

#[test]
fn wait_returns_a_value_completed_on_another_thread() {
  let future = ActorFuture::<u32>::new();
  let producer = future.clone();

  let handle = thread::spawn(move || {
    thread::sleep(Duration::from_millis(10));
    producer.complete(5);
  });

  assert_eq!(future.wait(), Some(5));
  handle.join().unwrap();
}

#[test]
fn wait_timeout_gives_up_on_a_pending_future() {
  let future = ActorFuture::<u32>::new();

  assert_eq!(future.wait_timeout(Duration::from_millis(5)), None);
  assert!(!future.is_ready());
}

#[test]
fn taken_values_are_not_waited_for_again() {
  let future = ActorFuture::<u32>::new();
  future.complete(1);

  assert_eq!(future.wait_timeout(Duration::from_secs(1)), Some(1));
  assert_eq!(future.wait(), None);
}
