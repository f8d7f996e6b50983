use alloc::string::String;
use core::{fmt, time::Duration};

use tessera_utils_rs::core::sync::ArcShared;

use super::{DispatchExecutor, DispatchShared, InlineExecutor};
use crate::core::dispatch::mailbox::{Mailbox, ScheduleHints};


/// Number of user messages processed per batch when nothing else is configured.
pub const DEFAULT_THROUGHPUT: usize = 5;

struct DispatcherCore {
  id:                  String,
  executor:            ArcShared<dyn DispatchExecutor>,
  throughput:          usize,
  throughput_deadline: Option<Duration>,
}

/// Binds runnable mailboxes to an executor.
///
/// The handle is cheap to clone; all clones share the same executor and batch limits.
#[derive(Clone)]
pub struct Dispatcher {
  core: ArcShared<DispatcherCore>,
}

impl Dispatcher {
  /// Creates a dispatcher with the default throughput and no deadline.
  #[must_use]
  pub fn new(id: impl Into<String>, executor: ArcShared<dyn DispatchExecutor>) -> Self {
    Self::with_limits(id, executor, DEFAULT_THROUGHPUT, None)
  }

  /// Creates a dispatcher with explicit batch limits. A throughput of zero is treated as one.
  #[must_use]
  pub fn with_limits(
    id: impl Into<String>,
    executor: ArcShared<dyn DispatchExecutor>,
    throughput: usize,
    throughput_deadline: Option<Duration>,
  ) -> Self {
    let core = DispatcherCore { id: id.into(), executor, throughput: throughput.max(1), throughput_deadline };
    Self { core: ArcShared::new(core) }
  }

  /// Creates a dispatcher backed by an [`InlineExecutor`].
  #[must_use]
  pub fn inline(id: impl Into<String>) -> Self {
    let executor = ArcShared::new(InlineExecutor::new()).into_dyn(|executor| executor as &dyn DispatchExecutor);
    Self::new(id, executor)
  }

  /// Registry id.
  #[must_use]
  pub fn id(&self) -> &str {
    &self.core.id
  }

  /// Maximum number of user messages per batch.
  #[must_use]
  pub fn throughput(&self) -> usize {
    self.core.throughput
  }

  /// Optional time budget per batch.
  #[must_use]
  pub fn throughput_deadline(&self) -> Option<Duration> {
    self.core.throughput_deadline
  }

  /// Executor running this dispatcher's batches.
  #[must_use]
  pub fn executor(&self) -> &ArcShared<dyn DispatchExecutor> {
    &self.core.executor
  }

  /// Schedules `mailbox` if it has work and nobody else is running it.
  ///
  /// Returns `true` if a batch was handed to the executor. When the executor refuses the batch
  /// the claim is released and the failure is reported to the mailbox invoker.
  pub fn register_for_execution(&self, mailbox: &ArcShared<Mailbox>, hints: ScheduleHints) -> bool {
    if !mailbox.can_be_scheduled_for_execution(hints) || !mailbox.set_as_scheduled() {
      return false;
    }
    match self.core.executor.execute(DispatchShared::new(self.clone(), mailbox.clone())) {
      | Ok(()) => true,
      | Err(error) => {
        mailbox.set_as_idle();
        if let Some(invoker) = mailbox.invoker() {
          invoker.report_dispatch_failure(&error);
        }
        false
      },
    }
  }

  /// Shuts down the executor.
  pub fn shutdown(&self) {
    self.core.executor.shutdown();
  }
}

impl fmt::Debug for Dispatcher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Dispatcher")
      .field("id", &self.core.id)
      .field("throughput", &self.core.throughput)
      .field("throughput_deadline", &self.core.throughput_deadline)
      .finish()
  }
}
