use alloc::collections::VecDeque;

use portable_atomic::{AtomicBool, Ordering};
use tessera_utils_rs::core::sync::SpinSyncMutex;

use super::{DispatchExecutor, DispatchShared};
use crate::core::error::DispatchError;


/// Executor that runs batches on the submitting thread.
///
/// Submissions made while a batch is already being driven, including submissions from inside
/// that batch, are queued and drained by the thread that is already driving, so nested sends
/// never recurse.
#[derive(Default)]
pub struct InlineExecutor {
  queue:   SpinSyncMutex<VecDeque<DispatchShared>>,
  running: AtomicBool,
}

impl InlineExecutor {
  /// Creates an idle executor.
  #[must_use]
  pub fn new() -> Self {
    Self { queue: SpinSyncMutex::new(VecDeque::new()), running: AtomicBool::new(false) }
  }

  fn drain(&self) {
    loop {
      loop {
        let next = self.queue.lock().pop_front();
        match next {
          | Some(task) => task.drive(),
          | None => break,
        }
      }
      self.running.store(false, Ordering::Release);
      if self.queue.lock().is_empty() || self.running.swap(true, Ordering::AcqRel) {
        return;
      }
    }
  }
}

impl DispatchExecutor for InlineExecutor {
  fn execute(&self, task: DispatchShared) -> Result<(), DispatchError> {
    self.queue.lock().push_back(task);
    if !self.running.swap(true, Ordering::AcqRel) {
      self.drain();
    }
    Ok(())
  }

  fn supports_blocking(&self) -> bool {
    false
  }
}
