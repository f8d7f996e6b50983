use super::DispatchShared;
use crate::core::error::DispatchError;

/// Runs mailbox batches handed over by a dispatcher.
pub trait DispatchExecutor: Send + Sync {
  /// Schedules `task`; the executor eventually calls [`DispatchShared::drive`] exactly once.
  ///
  /// # Errors
  ///
  /// Returns [`DispatchError`] when the executor refuses the task.
  fn execute(&self, task: DispatchShared) -> Result<(), DispatchError>;

  /// Stops accepting tasks and releases worker resources.
  fn shutdown(&self) {}

  /// Returns `true` if tasks may block their worker thread, e.g. on a full bounded mailbox.
  fn supports_blocking(&self) -> bool {
    true
  }
}
