use core::time::Duration;
use std::time::Instant;

use crate::core::time::MonotonicClock;

/// Monotonic clock measuring elapsed time since its creation.
#[derive(Debug, Clone, Copy)]
pub struct StdMonotonicClock {
  origin: Instant,
}

impl StdMonotonicClock {
  /// Creates a clock whose origin is the current instant.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }
}

impl Default for StdMonotonicClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MonotonicClock for StdMonotonicClock {
  fn now(&self) -> Duration {
    self.origin.elapsed()
  }
}
