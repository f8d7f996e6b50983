use portable_atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;

use crate::core::{
  dispatch::dispatcher::{DispatchExecutor, DispatchShared},
  error::DispatchError,
};


/// Executor running mailbox batches on the blocking pool of a tokio runtime.
pub struct TokioExecutor {
  handle:   Handle,
  shutdown: AtomicBool,
}

impl TokioExecutor {
  /// Creates an executor spawning onto `handle`.
  #[must_use]
  pub const fn new(handle: Handle) -> Self {
    Self { handle, shutdown: AtomicBool::new(false) }
  }

  /// Creates an executor for the runtime the caller runs in.
  ///
  /// # Panics
  ///
  /// Panics when called outside a tokio runtime.
  #[must_use]
  pub fn current() -> Self {
    Self::new(Handle::current())
  }

  /// Runtime handle batches are spawned on.
  #[must_use]
  pub const fn handle(&self) -> &Handle {
    &self.handle
  }
}

impl DispatchExecutor for TokioExecutor {
  fn execute(&self, task: DispatchShared) -> Result<(), DispatchError> {
    if self.shutdown.load(Ordering::Acquire) {
      return Err(DispatchError::Shutdown);
    }
    drop(self.handle.spawn_blocking(move || task.drive()));
    Ok(())
  }

  fn shutdown(&self) {
    self.shutdown.store(true, Ordering::Release);
  }

  fn supports_blocking(&self) -> bool {
    true
  }
}
