use alloc::string::String;

use tessera_utils_rs::{
  core::sync::ArcShared,
  std::{DedicatedThreadPool, DedicatedThreadPoolSettings, PanicHandler, ThreadPoolError},
};

use crate::core::{
  dispatch::dispatcher::{DispatchExecutor, DispatchShared},
  error::DispatchError,
};

#[cfg(test)]
mod tests;

/// Executor running mailbox batches on a [`DedicatedThreadPool`].
///
/// Panics escaping a batch are reported through `tracing` and the worker keeps serving other
/// mailboxes.
pub struct ThreadPoolExecutor {
  pool: DedicatedThreadPool,
}

impl ThreadPoolExecutor {
  /// Spawns `threads` workers named `name-<index>`.
  ///
  /// # Errors
  ///
  /// Returns [`ThreadPoolError::Spawn`] when a worker thread cannot be created.
  pub fn new(threads: usize, name: impl Into<String>) -> Result<Self, ThreadPoolError> {
    Self::with_settings(DedicatedThreadPoolSettings::new(threads, name))
  }

  /// Spawns the pool described by `settings`, installing a logging panic handler unless one is
  /// already configured.
  ///
  /// # Errors
  ///
  /// Returns [`ThreadPoolError::Spawn`] when a worker thread cannot be created.
  pub fn with_settings(settings: DedicatedThreadPoolSettings) -> Result<Self, ThreadPoolError> {
    let settings = match settings.panic_handler() {
      | Some(_) => settings,
      | None => settings.with_panic_handler(Self::log_panic()),
    };
    Ok(Self { pool: DedicatedThreadPool::new(&settings)? })
  }

  /// Number of worker threads.
  #[must_use]
  pub const fn thread_count(&self) -> usize {
    self.pool.thread_count()
  }

  /// Returns `true` once the pool stopped accepting batches.
  #[must_use]
  pub fn is_shutdown(&self) -> bool {
    self.pool.is_shutdown()
  }

  fn log_panic() -> PanicHandler {
    ArcShared::new(|message: &str| {
      tracing::error!(target: "tessera::dispatch", panic = message, "mailbox batch panicked");
    })
    .into_dyn(|handler| handler as &(dyn Fn(&str) + Send + Sync))
  }
}

impl DispatchExecutor for ThreadPoolExecutor {
  fn execute(&self, task: DispatchShared) -> Result<(), DispatchError> {
    self.pool.queue_user_work_item(move || task.drive()).map_err(|error| match error {
      | ThreadPoolError::ShutDown => DispatchError::Shutdown,
      | ThreadPoolError::Spawn(reason) => DispatchError::Rejected(reason),
    })
  }

  fn shutdown(&self) {
    self.pool.shutdown();
  }

  fn supports_blocking(&self) -> bool {
    true
  }
}

impl core::fmt::Debug for ThreadPoolExecutor {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ThreadPoolExecutor").field("pool", &self.pool).finish()
  }
}
