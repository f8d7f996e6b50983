use core::time::Duration;


/// Restart bookkeeping a parent keeps for one child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildRestartStats {
  restart_count: u32,
  window_start:  Option<Duration>,
}

impl ChildRestartStats {
  /// Fresh statistics with no recorded restarts.
  #[must_use]
  pub const fn new() -> Self {
    Self { restart_count: 0, window_start: None }
  }

  /// Restarts counted in the current window.
  #[must_use]
  pub const fn restart_count(&self) -> u32 {
    self.restart_count
  }

  /// Start of the current window, if one is open.
  #[must_use]
  pub const fn window_start(&self) -> Option<Duration> {
    self.window_start
  }

  /// Records a restart attempt at `now` and returns whether it is allowed.
  ///
  /// With a window, the count restarts at one whenever `now` lies outside the window opened by
  /// the first counted restart. A window without a limit allows a single restart per window.
  pub fn request_restart_permission(
    &mut self,
    max_restarts: Option<u32>,
    within: Option<Duration>,
    now: Duration,
  ) -> bool {
    match (max_restarts, within) {
      | (Some(max), _) if max < 1 => false,
      | (Some(max), None) => {
        self.restart_count = self.restart_count.saturating_add(1);
        self.restart_count <= max
      },
      | (max, Some(window)) => self.retries_in_window_okay(max.unwrap_or(1), window, now),
      | (None, None) => true,
    }
  }

  fn retries_in_window_okay(&mut self, max: u32, window: Duration, now: Duration) -> bool {
    let attempts = self.restart_count.saturating_add(1);
    let window_start = *self.window_start.get_or_insert(now);
    if now.saturating_sub(window_start) <= window {
      self.restart_count = attempts;
      attempts <= max
    } else {
      self.restart_count = 1;
      self.window_start = Some(now);
      true
    }
  }
}
