use core::time::Duration;

use portable_atomic::{AtomicU64, Ordering};

use super::MonotonicClock;


/// Clock advanced explicitly by the owner, for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
  nanos: AtomicU64,
}

impl ManualClock {
  /// Creates a clock positioned at its origin.
  #[must_use]
  pub const fn new() -> Self {
    Self { nanos: AtomicU64::new(0) }
  }

  /// Moves the clock forward by `delta`.
  pub fn advance(&self, delta: Duration) {
    let step = u64::try_from(delta.as_nanos()).unwrap_or(u64::MAX);
    let mut current = self.nanos.load(Ordering::Acquire);
    loop {
      let next = current.saturating_add(step);
      match self.nanos.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
        | Ok(_) => return,
        | Err(observed) => current = observed,
      }
    }
  }
}

impl MonotonicClock for ManualClock {
  fn now(&self) -> Duration {
    Duration::from_nanos(self.nanos.load(Ordering::Acquire))
  }
}
