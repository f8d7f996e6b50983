use core::{fmt, time::Duration};

use tessera_utils_rs::core::sync::ArcShared;

use super::{ChildRestartStats, SupervisorDirective, SupervisorStrategyKind};
use crate::core::error::ActorError;

#[cfg(test)]
mod tests;

/// Decision function mapping a failure to a directive.
pub type SupervisorDecider = ArcShared<dyn Fn(&ActorError) -> SupervisorDirective + Send + Sync + 'static>;

/// How a parent reacts to failures of its children.
///
/// Without a custom decider, recoverable errors restart the child and fatal errors stop it. A
/// restart is only granted while the child's budget of `max_restarts` within `within` lasts;
/// an exhausted budget escalates the failure.
#[derive(Clone)]
pub struct SupervisorStrategy {
  kind:         SupervisorStrategyKind,
  max_restarts: Option<u32>,
  within:       Option<Duration>,
  decider:      Option<SupervisorDecider>,
}

impl SupervisorStrategy {
  /// One-for-one strategy with an unlimited restart budget.
  #[must_use]
  pub const fn one_for_one() -> Self {
    Self { kind: SupervisorStrategyKind::OneForOne, max_restarts: None, within: None, decider: None }
  }

  /// All-for-one strategy with an unlimited restart budget.
  #[must_use]
  pub const fn all_for_one() -> Self {
    Self { kind: SupervisorStrategyKind::AllForOne, max_restarts: None, within: None, decider: None }
  }

  /// One-for-one strategy that stops every failing child.
  #[must_use]
  pub fn stopping() -> Self {
    Self::one_for_one().with_decider(|_: &ActorError| SupervisorDirective::Stop)
  }

  /// Limits the number of restarts; zero forbids restarting.
  #[must_use]
  pub const fn with_max_restarts(mut self, max_restarts: u32) -> Self {
    self.max_restarts = Some(max_restarts);
    self
  }

  /// Window in which `max_restarts` is counted.
  #[must_use]
  pub const fn with_within(mut self, within: Duration) -> Self {
    self.within = Some(within);
    self
  }

  /// Replaces the default decider.
  #[must_use]
  pub fn with_decider<F>(mut self, decider: F) -> Self
  where
    F: Fn(&ActorError) -> SupervisorDirective + Send + Sync + 'static, {
    let decider: SupervisorDecider = ArcShared::new(decider)
      .into_dyn(|decider| decider as &(dyn Fn(&ActorError) -> SupervisorDirective + Send + Sync + 'static));
    self.decider = Some(decider);
    self
  }

  /// Directive scope.
  #[must_use]
  pub const fn kind(&self) -> SupervisorStrategyKind {
    self.kind
  }

  /// Restart limit, `None` when unlimited.
  #[must_use]
  pub const fn max_restarts(&self) -> Option<u32> {
    self.max_restarts
  }

  /// Restart window, `None` when restarts are counted forever.
  #[must_use]
  pub const fn within(&self) -> Option<Duration> {
    self.within
  }

  /// Maps a failure to a directive.
  #[must_use]
  pub fn decide(&self, error: &ActorError) -> SupervisorDirective {
    match &self.decider {
      | Some(decider) => decider(error),
      | None if error.is_recoverable() => SupervisorDirective::Restart,
      | None => SupervisorDirective::Stop,
    }
  }

  /// Charges one restart to `stats`; returns `false` when the budget is exhausted.
  pub fn request_restart_permission(&self, stats: &mut ChildRestartStats, now: Duration) -> bool {
    stats.request_restart_permission(self.max_restarts, self.within, now)
  }
}

impl Default for SupervisorStrategy {
  fn default() -> Self {
    Self::one_for_one()
  }
}

impl fmt::Debug for SupervisorStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SupervisorStrategy")
      .field("kind", &self.kind)
      .field("max_restarts", &self.max_restarts)
      .field("within", &self.within)
      .field("custom_decider", &self.decider.is_some())
      .finish()
  }
}
