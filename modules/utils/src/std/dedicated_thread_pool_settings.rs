use alloc::string::String;
use core::fmt;

use crate::core::sync::ArcShared;

/// Callback receiving the message of a panic raised by a work item.
pub type PanicHandler = ArcShared<dyn Fn(&str) + Send + Sync>;

/// Construction parameters for [`DedicatedThreadPool`](super::DedicatedThreadPool).
#[derive(Clone)]
pub struct DedicatedThreadPoolSettings {
  thread_count:  usize,
  name:          String,
  spin_limit:    Option<u32>,
  stack_size:    Option<usize>,
  panic_handler: Option<PanicHandler>,
}

impl DedicatedThreadPoolSettings {
  /// Creates settings for `thread_count` workers (at least one) named after `name`.
  #[must_use]
  pub fn new(thread_count: usize, name: impl Into<String>) -> Self {
    Self {
      thread_count:  thread_count.max(1),
      name:          name.into(),
      spin_limit:    None,
      stack_size:    None,
      panic_handler: None,
    }
  }

  /// Overrides how many spin iterations an idle worker performs before parking.
  #[must_use]
  pub const fn with_spin_limit(mut self, spin_limit: u32) -> Self {
    self.spin_limit = Some(spin_limit);
    self
  }

  /// Sets the stack size of every worker thread.
  #[must_use]
  pub const fn with_stack_size(mut self, bytes: usize) -> Self {
    self.stack_size = Some(bytes);
    self
  }

  /// Installs a callback invoked when a work item panics.
  #[must_use]
  pub fn with_panic_handler(mut self, handler: PanicHandler) -> Self {
    self.panic_handler = Some(handler);
    self
  }

  /// Number of worker threads.
  #[must_use]
  pub const fn thread_count(&self) -> usize {
    self.thread_count
  }

  /// Prefix of every worker thread name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Spin limit override, if any.
  #[must_use]
  pub const fn spin_limit(&self) -> Option<u32> {
    self.spin_limit
  }

  /// Stack size override, if any.
  #[must_use]
  pub const fn stack_size(&self) -> Option<usize> {
    self.stack_size
  }

  /// Installed panic callback, if any.
  #[must_use]
  pub fn panic_handler(&self) -> Option<&PanicHandler> {
    self.panic_handler.as_ref()
  }
}

impl fmt::Debug for DedicatedThreadPoolSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DedicatedThreadPoolSettings")
      .field("thread_count", &self.thread_count)
      .field("name", &self.name)
      .field("spin_limit", &self.spin_limit)
      .field("stack_size", &self.stack_size)
      .finish()
  }
}
