use alloc::vec::Vec;
use core::time::Duration;
use std::{thread, time::Instant};

use portable_atomic::{AtomicUsize, Ordering};
use tessera_utils_rs::{
  core::{
    sync::{ArcShared, SpinSyncMutex},
    time::MonotonicClock,
  },
  std::StdMonotonicClock,
};

use super::ThreadPoolExecutor;
use crate::core::{
  dispatch::{
    dispatcher::{DispatchExecutor, Dispatcher},
    mailbox::{Mailbox, MailboxPolicy, ScheduleHints},
  },
  error::DispatchError,
  messaging::{AnyMessage, MessageInvoker, SystemMessage},
};

#[derive(Default)]
struct ExclusiveInvoker {
  active:   AtomicUsize,
  overlaps: AtomicUsize,
  seen:     SpinSyncMutex<Vec<u32>>,
  failures: SpinSyncMutex<Vec<DispatchError>>,
}

impl MessageInvoker for ExclusiveInvoker {
  fn invoke_system_message(&self, _message: SystemMessage) {}

  fn invoke_user_message(&self, message: AnyMessage) {
    if self.active.fetch_add(1, Ordering::AcqRel) != 0 {
      self.overlaps.fetch_add(1, Ordering::AcqRel);
    }
    self.seen.lock().push(*message.downcast_ref::<u32>().unwrap());
    self.active.fetch_sub(1, Ordering::AcqRel);
  }

  fn discard_system_message(&self, _message: SystemMessage) {}

  fn report_dispatch_failure(&self, error: &DispatchError) {
    self.failures.lock().push(error.clone());
  }
}

fn pooled(threads: usize) -> (ArcShared<ThreadPoolExecutor>, Dispatcher) {
  let executor = ArcShared::new(ThreadPoolExecutor::new(threads, "pool-tests").unwrap());
  let dispatcher = Dispatcher::new("pooled", executor.clone().into_dyn(|executor| executor as &dyn DispatchExecutor));
  (executor, dispatcher)
}

fn mailbox_with(invoker: &ArcShared<ExclusiveInvoker>) -> ArcShared<Mailbox> {
  let clock = ArcShared::new(StdMonotonicClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
  let mailbox = ArcShared::new(Mailbox::new(MailboxPolicy::unbounded(), clock));
  mailbox.install_invoker(invoker.clone().into_dyn(|invoker| invoker as &dyn MessageInvoker));
  mailbox
}

fn wait_until(condition: impl Fn() -> bool) -> bool {
  let deadline = Instant::now() + Duration::from_secs(5);
  while Instant::now() < deadline {
    if condition() {
      return true;
    }
    thread::sleep(Duration::from_millis(1));
  }
  condition()
}

#[test]
fn concurrent_producers_never_run_one_mailbox_twice() {
  let (executor, dispatcher) = pooled(4);
  let invoker = ArcShared::new(ExclusiveInvoker::default());
  let mailbox = mailbox_with(&invoker);

  let producers: Vec<_> = (0..4_u32)
    .map(|producer| {
      let mailbox = mailbox.clone();
      let dispatcher = dispatcher.clone();
      thread::spawn(move || {
        for index in 0..250 {
          mailbox.enqueue_user(AnyMessage::new(producer * 1_000 + index)).unwrap();
          dispatcher.register_for_execution(&mailbox, ScheduleHints::USER);
        }
      })
    })
    .collect();
  for producer in producers {
    producer.join().unwrap();
  }

  assert!(wait_until(|| invoker.seen.lock().len() == 1_000));
  assert_eq!(invoker.overlaps.load(Ordering::Acquire), 0);
  let seen = invoker.seen.lock().clone();
  for producer in 0..4_u32 {
    let own: Vec<u32> = seen.iter().copied().filter(|value| value / 1_000 == producer).collect();
    assert!(own.windows(2).all(|pair| pair[0] < pair[1]), "per-producer order is preserved");
  }
  executor.shutdown();
}

#[test]
fn batches_are_rejected_after_shutdown() {
  let (executor, dispatcher) = pooled(1);
  let invoker = ArcShared::new(ExclusiveInvoker::default());
  let mailbox = mailbox_with(&invoker);

  dispatcher.shutdown();
  assert!(executor.is_shutdown());
  mailbox.enqueue_user(AnyMessage::new(1_u32)).unwrap();

  assert!(!dispatcher.register_for_execution(&mailbox, ScheduleHints::USER));
  assert_eq!(invoker.failures.lock().clone(), [DispatchError::Shutdown]);
  assert!(invoker.seen.lock().is_empty());
}

#[test]
fn pool_supports_blocking_mailboxes() {
  let (executor, _dispatcher) = pooled(2);

  assert!(executor.supports_blocking());
  assert_eq!(executor.thread_count(), 2);
  executor.shutdown();
}
