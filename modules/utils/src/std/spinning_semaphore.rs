use core::{hint, time::Duration};
use std::{
  sync::{Condvar, Mutex, PoisonError},
  thread,
  time::Instant,
};

use portable_atomic::{AtomicU64, Ordering};

#[cfg(test)]
mod tests;

/// Spin iterations granted per logical processor before an idle thread parks.
const SPIN_ITERATIONS_PER_PROCESSOR: u32 = 50;
/// Every this many spin iterations the spinner yields its time slice.
const YIELD_EVERY: u32 = 10;

const SIGNAL_MASK: u64 = 0xFFFF_FFFF;
const WAITER_SHIFT: u32 = 32;
const WAITER_MASK: u64 = 0xFFFF;
const SPINNER_SHIFT: u32 = 48;
const SPINNER_MASK: u64 = 0xFF;
const SIGNALED_SHIFT: u32 = 56;
const SIGNALED_MASK: u64 = 0xFF;

/// Bit-packed semaphore state.
///
/// Layout, low to high: signal count (32 bits), waiter count (16 bits), spinner count (8 bits),
/// waiters signaled to wake but not yet awake (8 bits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Counts(u64);

impl Counts {
  const fn signal_count(self) -> u32 {
    (self.0 & SIGNAL_MASK) as u32
  }

  const fn waiter_count(self) -> u16 {
    ((self.0 >> WAITER_SHIFT) & WAITER_MASK) as u16
  }

  const fn spinner_count(self) -> u8 {
    ((self.0 >> SPINNER_SHIFT) & SPINNER_MASK) as u8
  }

  const fn signaled_to_wake(self) -> u8 {
    ((self.0 >> SIGNALED_SHIFT) & SIGNALED_MASK) as u8
  }

  const fn with_signal_count(self, value: u32) -> Self {
    Self((self.0 & !SIGNAL_MASK) | value as u64)
  }

  const fn with_waiter_count(self, value: u16) -> Self {
    Self((self.0 & !(WAITER_MASK << WAITER_SHIFT)) | ((value as u64) << WAITER_SHIFT))
  }

  const fn with_spinner_count(self, value: u8) -> Self {
    Self((self.0 & !(SPINNER_MASK << SPINNER_SHIFT)) | ((value as u64) << SPINNER_SHIFT))
  }

  const fn with_signaled_to_wake(self, value: u8) -> Self {
    Self((self.0 & !(SIGNALED_MASK << SIGNALED_SHIFT)) | ((value as u64) << SIGNALED_SHIFT))
  }
}

/// Counting semaphore that prefers handing signals to spinning threads over waking parked ones.
///
/// A waiting thread first registers as a spinner and polls the signal count for a bounded number
/// of iterations. Only when no signal shows up does it demote itself to a waiter and block on the
/// OS. [`release`](Self::release) satisfies spinners first, then wakes parked waiters, and banks
/// whatever remains for future callers of [`wait`](Self::wait).
pub struct SpinningSemaphore {
  counts:     AtomicU64,
  spin_limit: u32,
  permits:    Mutex<u32>,
  wakeup:     Condvar,
}

impl SpinningSemaphore {
  /// Creates a semaphore holding `initial` signals with the default spin limit.
  #[must_use]
  pub fn new(initial: u32) -> Self {
    Self::with_spin_limit(initial, Self::default_spin_limit())
  }

  /// Creates a semaphore with an explicit spin limit (0 disables spinning).
  #[must_use]
  pub fn with_spin_limit(initial: u32, spin_limit: u32) -> Self {
    Self {
      counts: AtomicU64::new(Counts(0).with_signal_count(initial).0),
      spin_limit,
      permits: Mutex::new(0),
      wakeup: Condvar::new(),
    }
  }

  /// Spin limit scaled by the number of logical processors.
  #[must_use]
  pub fn default_spin_limit() -> u32 {
    let processors = thread::available_parallelism().map_or(1, |count| count.get());
    SPIN_ITERATIONS_PER_PROCESSOR.saturating_mul(u32::try_from(processors).unwrap_or(u32::MAX))
  }

  /// Returns the configured spin limit.
  #[must_use]
  pub const fn spin_limit(&self) -> u32 {
    self.spin_limit
  }

  /// Returns the number of banked signals.
  #[must_use]
  pub fn signal_count(&self) -> u32 {
    self.load().signal_count()
  }

  /// Returns the number of threads currently parked in the OS.
  #[must_use]
  pub fn waiter_count(&self) -> u16 {
    self.load().waiter_count()
  }

  /// Acquires one signal.
  ///
  /// When `spin` is `true` the caller polls for up to the spin limit before parking. Returns
  /// `false` only when `timeout` elapsed without a signal.
  pub fn wait(&self, timeout: Option<Duration>, spin: bool) -> bool {
    let deadline = timeout.and_then(|timeout| Instant::now().checked_add(timeout));
    let mut spinning = false;

    let mut counts = self.load();
    loop {
      let next = if counts.signal_count() != 0 {
        counts.with_signal_count(counts.signal_count() - 1)
      } else if spin && self.spin_limit > 0 && counts.spinner_count() < u8::MAX {
        counts.with_spinner_count(counts.spinner_count() + 1)
      } else {
        break;
      };
      match self.compare_exchange(counts, next) {
        | Ok(()) => {
          if counts.signal_count() != 0 {
            return true;
          }
          spinning = true;
          break;
        },
        | Err(observed) => counts = observed,
      }
    }

    if spinning {
      for iteration in 0..self.spin_limit {
        if iteration % YIELD_EVERY == YIELD_EVERY - 1 {
          thread::yield_now();
        } else {
          hint::spin_loop();
        }
        let mut counts = self.load();
        while counts.signal_count() > 0 {
          let next =
            counts.with_signal_count(counts.signal_count() - 1).with_spinner_count(counts.spinner_count() - 1);
          match self.compare_exchange(counts, next) {
            | Ok(()) => return true,
            | Err(observed) => counts = observed,
          }
        }
      }
    }

    let mut counts = self.load();
    loop {
      let mut next = counts;
      if spinning {
        next = next.with_spinner_count(counts.spinner_count() - 1);
      }
      if counts.signal_count() != 0 {
        next = next.with_signal_count(counts.signal_count() - 1);
      } else {
        next = next.with_waiter_count(counts.waiter_count().saturating_add(1));
      }
      match self.compare_exchange(counts, next) {
        | Ok(()) => {
          if counts.signal_count() != 0 {
            return true;
          }
          break;
        },
        | Err(observed) => counts = observed,
      }
    }

    self.wait_for_signal(deadline)
  }

  /// Releases `count` signals.
  ///
  /// Spinners are expected to pick signals up on their own; parked waiters are woken only for
  /// the part not covered by spinners or by waiters already signaled to wake.
  pub fn release(&self, count: u32) {
    if count == 0 {
      return;
    }
    let mut counts = self.load();
    loop {
      let signal_count = counts.signal_count().saturating_add(count);
      let mut next = counts.with_signal_count(signal_count);

      let spinners = u32::from(counts.spinner_count());
      let waiters = u32::from(counts.waiter_count());
      let signaled = u32::from(counts.signaled_to_wake());
      let mut to_wake = signal_count.min(waiters + spinners).saturating_sub(spinners).saturating_sub(signaled);
      if to_wake > 0 {
        to_wake = to_wake.min(count);
        let signaled_after = (signaled + to_wake).min(u32::from(u8::MAX));
        next = next.with_signaled_to_wake(signaled_after as u8);
      }

      match self.compare_exchange(counts, next) {
        | Ok(()) => {
          if to_wake > 0 {
            self.unpark(to_wake);
          }
          return;
        },
        | Err(observed) => counts = observed,
      }
    }
  }

  fn wait_for_signal(&self, deadline: Option<Instant>) -> bool {
    loop {
      if !self.park(deadline) {
        let mut counts = self.load();
        loop {
          let next = counts.with_waiter_count(counts.waiter_count().saturating_sub(1));
          match self.compare_exchange(counts, next) {
            | Ok(()) => return false,
            | Err(observed) => counts = observed,
          }
        }
      }

      let mut counts = self.load();
      loop {
        let mut next = counts;
        if counts.signal_count() != 0 {
          next = next
            .with_signal_count(counts.signal_count() - 1)
            .with_waiter_count(counts.waiter_count().saturating_sub(1));
        }
        if counts.signaled_to_wake() != 0 {
          next = next.with_signaled_to_wake(counts.signaled_to_wake() - 1);
        }
        match self.compare_exchange(counts, next) {
          | Ok(()) => {
            if counts.signal_count() != 0 {
              return true;
            }
            break;
          },
          | Err(observed) => counts = observed,
        }
      }
    }
  }

  fn park(&self, deadline: Option<Instant>) -> bool {
    let mut permits = self.permits.lock().unwrap_or_else(PoisonError::into_inner);
    loop {
      if *permits > 0 {
        *permits -= 1;
        return true;
      }
      match deadline {
        | None => {
          permits = self.wakeup.wait(permits).unwrap_or_else(PoisonError::into_inner);
        },
        | Some(deadline) => {
          let now = Instant::now();
          if now >= deadline {
            return false;
          }
          let (guard, _) = self.wakeup.wait_timeout(permits, deadline - now).unwrap_or_else(PoisonError::into_inner);
          permits = guard;
        },
      }
    }
  }

  fn unpark(&self, count: u32) {
    {
      let mut permits = self.permits.lock().unwrap_or_else(PoisonError::into_inner);
      *permits = permits.saturating_add(count);
    }
    for _ in 0..count {
      self.wakeup.notify_one();
    }
  }

  fn load(&self) -> Counts {
    Counts(self.counts.load(Ordering::Acquire))
  }

  fn compare_exchange(&self, current: Counts, next: Counts) -> Result<(), Counts> {
    self.counts.compare_exchange(current.0, next.0, Ordering::AcqRel, Ordering::Acquire).map(|_| ()).map_err(Counts)
  }
}

impl core::fmt::Debug for SpinningSemaphore {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let counts = self.load();
    f.debug_struct("SpinningSemaphore")
      .field("signal_count", &counts.signal_count())
      .field("waiter_count", &counts.waiter_count())
      .field("spinner_count", &counts.spinner_count())
      .field("signaled_to_wake", &counts.signaled_to_wake())
      .field("spin_limit", &self.spin_limit)
      .finish()
  }
}
