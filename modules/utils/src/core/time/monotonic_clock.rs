use core::time::Duration;

/// Source of monotonic time used for throughput deadlines and restart windows.
///
/// Readings are offsets from an arbitrary, clock-specific origin and never decrease.
pub trait MonotonicClock: Send + Sync {
  /// Returns the elapsed time since the clock origin.
  fn now(&self) -> Duration;
}
