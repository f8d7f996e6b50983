use core::{fmt, time::Duration};

use tessera_utils_rs::core::sync::ArcShared;

use crate::core::dispatch::dispatcher::{DEFAULT_THROUGHPUT, DispatchExecutor, Dispatcher, InlineExecutor};

/// Executor and batch limits of a dispatcher registered under an id.
#[derive(Clone)]
pub struct DispatcherConfig {
  executor:            ArcShared<dyn DispatchExecutor>,
  throughput:          usize,
  throughput_deadline: Option<Duration>,
}

impl DispatcherConfig {
  /// Creates a configuration with the default throughput and no deadline.
  #[must_use]
  pub fn new(executor: ArcShared<dyn DispatchExecutor>) -> Self {
    Self { executor, throughput: DEFAULT_THROUGHPUT, throughput_deadline: None }
  }

  /// Configuration running batches on the calling thread.
  #[must_use]
  pub fn inline() -> Self {
    Self::new(ArcShared::new(InlineExecutor::new()).into_dyn(|executor| executor as &dyn DispatchExecutor))
  }

  /// Maximum number of user messages per batch.
  #[must_use]
  pub const fn with_throughput(mut self, throughput: usize) -> Self {
    self.throughput = throughput;
    self
  }

  /// Time budget per batch.
  #[must_use]
  pub const fn with_throughput_deadline(mut self, deadline: Duration) -> Self {
    self.throughput_deadline = Some(deadline);
    self
  }

  /// Executor running the batches.
  #[must_use]
  pub const fn executor(&self) -> &ArcShared<dyn DispatchExecutor> {
    &self.executor
  }

  /// Configured throughput.
  #[must_use]
  pub const fn throughput(&self) -> usize {
    self.throughput
  }

  /// Configured batch deadline.
  #[must_use]
  pub const fn throughput_deadline(&self) -> Option<Duration> {
    self.throughput_deadline
  }

  pub(crate) fn build(&self, id: &str) -> Dispatcher {
    Dispatcher::with_limits(id, self.executor.clone(), self.throughput, self.throughput_deadline)
  }
}

impl fmt::Debug for DispatcherConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatcherConfig")
      .field("throughput", &self.throughput)
      .field("throughput_deadline", &self.throughput_deadline)
      .finish_non_exhaustive()
  }
}
