use core::time::Duration;
use std::{sync::Arc, thread, time::Instant};

use super::{Counts, SpinningSemaphore};

fn wait_until(deadline: Duration, mut condition: impl FnMut() -> bool) -> bool {
  let start = Instant::now();
  while start.elapsed() < deadline {
    if condition() {
      return true;
    }
    thread::yield_now();
  }
  condition()
}

#[test]
fn packed_fields_do_not_overlap() {
  let counts =
    Counts(0).with_signal_count(u32::MAX).with_waiter_count(7).with_spinner_count(3).with_signaled_to_wake(2);
  assert_eq!(counts.signal_count(), u32::MAX);
  assert_eq!(counts.waiter_count(), 7);
  assert_eq!(counts.spinner_count(), 3);
  assert_eq!(counts.signaled_to_wake(), 2);

  let cleared = counts.with_waiter_count(0);
  assert_eq!(cleared.signal_count(), u32::MAX);
  assert_eq!(cleared.spinner_count(), 3);
}

#[test]
fn banked_signals_are_consumed_without_blocking() {
  let semaphore = SpinningSemaphore::with_spin_limit(0, 0);
  semaphore.release(2);
  assert_eq!(semaphore.signal_count(), 2);
  assert!(semaphore.wait(Some(Duration::ZERO), false));
  assert!(semaphore.wait(Some(Duration::ZERO), true));
  assert_eq!(semaphore.signal_count(), 0);
}

#[test]
fn wait_times_out_and_unregisters_the_waiter() {
  let semaphore = SpinningSemaphore::with_spin_limit(0, 16);
  assert!(!semaphore.wait(Some(Duration::from_millis(20)), true));
  assert_eq!(semaphore.waiter_count(), 0);
  assert_eq!(semaphore.signal_count(), 0);
}

#[test]
fn release_wakes_a_parked_waiter() {
  let semaphore = Arc::new(SpinningSemaphore::with_spin_limit(0, 0));
  let waiter = {
    let semaphore = semaphore.clone();
    thread::spawn(move || semaphore.wait(Some(Duration::from_secs(5)), false))
  };

  assert!(wait_until(Duration::from_secs(5), || semaphore.waiter_count() == 1));
  semaphore.release(1);
  assert!(waiter.join().unwrap());
  assert_eq!(semaphore.waiter_count(), 0);
}

#[test]
fn release_wakes_every_parked_waiter_it_can_satisfy() {
  const WAITERS: usize = 4;
  let semaphore = Arc::new(SpinningSemaphore::with_spin_limit(0, 0));
  let handles: Vec<_> = (0..WAITERS)
    .map(|_| {
      let semaphore = semaphore.clone();
      thread::spawn(move || semaphore.wait(Some(Duration::from_secs(5)), false))
    })
    .collect();

  assert!(wait_until(Duration::from_secs(5), || usize::from(semaphore.waiter_count()) == WAITERS));
  semaphore.release(WAITERS as u32);
  for handle in handles {
    assert!(handle.join().unwrap());
  }
  assert_eq!(semaphore.signal_count(), 0);
}

#[test]
fn spinning_waiter_picks_up_a_signal() {
  let semaphore = Arc::new(SpinningSemaphore::with_spin_limit(0, 1_000));
  let waiter = {
    let semaphore = semaphore.clone();
    thread::spawn(move || semaphore.wait(Some(Duration::from_secs(5)), true))
  };
  semaphore.release(1);
  assert!(waiter.join().unwrap());
}
