use alloc::{
  boxed::Box,
  format,
  string::{String, ToString},
  vec::Vec,
};
use core::any::Any;
use std::{
  panic::{self, AssertUnwindSafe},
  thread::{self, JoinHandle},
};

use crossbeam_queue::SegQueue;
use portable_atomic::{AtomicBool, Ordering};

use super::{DedicatedThreadPoolSettings, PanicHandler, SpinningSemaphore, ThreadPoolError};
use crate::core::sync::{ArcShared, SpinSyncMutex};


type WorkItem = Box<dyn FnOnce() + Send + 'static>;

struct PoolShared {
  queue:         SegQueue<WorkItem>,
  semaphore:     SpinningSemaphore,
  shutdown:      AtomicBool,
  panic_handler: Option<PanicHandler>,
}

impl PoolShared {
  fn worker_loop(&self) {
    loop {
      while let Some(item) = self.queue.pop() {
        self.run(item);
      }
      if self.shutdown.load(Ordering::Acquire) {
        break;
      }
      self.semaphore.wait(None, true);
    }
  }

  fn run(&self, item: WorkItem) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(item)) {
      if let Some(handler) = &self.panic_handler {
        handler(&panic_message(payload.as_ref()));
      }
    }
  }
}

/// Fixed set of named worker threads draining a shared lock-free work queue.
///
/// Idle workers wait on a [`SpinningSemaphore`], so bursts of work are usually picked up by a
/// thread that is still spinning instead of one that has to be woken by the OS. A panicking work
/// item is caught and reported to the configured panic handler; the worker keeps running.
pub struct DedicatedThreadPool {
  shared:       ArcShared<PoolShared>,
  workers:      SpinSyncMutex<Vec<JoinHandle<()>>>,
  thread_count: usize,
}

impl DedicatedThreadPool {
  /// Spawns the worker threads described by `settings`.
  ///
  /// # Errors
  ///
  /// Returns [`ThreadPoolError::Spawn`] when the OS refuses to create a worker thread. Workers
  /// spawned before the failure are shut down again.
  pub fn new(settings: &DedicatedThreadPoolSettings) -> Result<Self, ThreadPoolError> {
    let spin_limit = settings.spin_limit().unwrap_or_else(SpinningSemaphore::default_spin_limit);
    let shared = ArcShared::new(PoolShared {
      queue:         SegQueue::new(),
      semaphore:     SpinningSemaphore::with_spin_limit(0, spin_limit),
      shutdown:      AtomicBool::new(false),
      panic_handler: settings.panic_handler().cloned(),
    });
    let pool = Self { shared, workers: SpinSyncMutex::new(Vec::new()), thread_count: settings.thread_count() };

    for index in 0..settings.thread_count() {
      let mut builder = thread::Builder::new().name(format!("{}-{index}", settings.name()));
      if let Some(stack_size) = settings.stack_size() {
        builder = builder.stack_size(stack_size);
      }
      let shared = pool.shared.clone();
      match builder.spawn(move || shared.worker_loop()) {
        | Ok(handle) => pool.workers.lock().push(handle),
        | Err(error) => {
          pool.shutdown();
          return Err(ThreadPoolError::Spawn(error.to_string()));
        },
      }
    }
    Ok(pool)
  }

  /// Queues a work item for execution on one of the workers.
  ///
  /// # Errors
  ///
  /// Returns [`ThreadPoolError::ShutDown`] once [`shutdown`](Self::shutdown) has been called.
  pub fn queue_user_work_item<F>(&self, work: F) -> Result<(), ThreadPoolError>
  where
    F: FnOnce() + Send + 'static, {
    if self.is_shutdown() {
      return Err(ThreadPoolError::ShutDown);
    }
    self.shared.queue.push(Box::new(work));
    self.shared.semaphore.release(1);
    Ok(())
  }

  /// Number of worker threads.
  #[must_use]
  pub const fn thread_count(&self) -> usize {
    self.thread_count
  }

  /// Number of queued work items that no worker has picked up yet.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.shared.queue.len()
  }

  /// Returns `true` once the pool stopped accepting work.
  #[must_use]
  pub fn is_shutdown(&self) -> bool {
    self.shared.shutdown.load(Ordering::Acquire)
  }

  /// Stops accepting work, lets workers drain the queue and joins them.
  ///
  /// Safe to call from a worker thread: the calling worker is not joined and exits once its
  /// current work item returns.
  pub fn shutdown(&self) {
    if self.shared.shutdown.swap(true, Ordering::AcqRel) {
      return;
    }
    self.shared.semaphore.release(u32::try_from(self.thread_count).unwrap_or(u32::MAX));
    let workers = core::mem::take(&mut *self.workers.lock());
    let current = thread::current().id();
    for handle in workers {
      if handle.thread().id() != current {
        let _ = handle.join();
      }
    }
  }
}

impl Drop for DedicatedThreadPool {
  fn drop(&mut self) {
    self.shutdown();
  }
}

impl core::fmt::Debug for DedicatedThreadPool {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("DedicatedThreadPool")
      .field("thread_count", &self.thread_count)
      .field("pending", &self.pending())
      .field("shutdown", &self.is_shutdown())
      .finish()
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    String::from("work item panicked with a non-string payload")
  }
}
