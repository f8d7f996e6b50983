use alloc::string::String;
use core::time::Duration;

use super::LifecycleStage;
use crate::core::{actor_prim::Pid, error::ActorError};

/// Event published whenever an actor changes lifecycle stage.
#[derive(Clone, Debug)]
pub struct LifecycleEvent {
  pid:       Pid,
  parent:    Option<Pid>,
  path:      String,
  stage:     LifecycleStage,
  reason:    Option<ActorError>,
  timestamp: Duration,
}

impl LifecycleEvent {
  /// Creates an event without a reason.
  #[must_use]
  pub const fn new(pid: Pid, parent: Option<Pid>, path: String, stage: LifecycleStage, timestamp: Duration) -> Self {
    Self { pid, parent, path, stage, reason: None, timestamp }
  }

  /// Attaches the failure that caused a restart.
  #[must_use]
  pub fn with_reason(mut self, reason: ActorError) -> Self {
    self.reason = Some(reason);
    self
  }

  /// Actor pid.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Parent pid; `None` for the root guardian.
  #[must_use]
  pub const fn parent(&self) -> Option<Pid> {
    self.parent
  }

  /// Actor path.
  #[must_use]
  pub fn path(&self) -> &str {
    &self.path
  }

  /// Lifecycle stage.
  #[must_use]
  pub const fn stage(&self) -> LifecycleStage {
    self.stage
  }

  /// Restart cause.
  #[must_use]
  pub const fn reason(&self) -> Option<&ActorError> {
    self.reason.as_ref()
  }

  /// Monotonic timestamp.
  #[must_use]
  pub const fn timestamp(&self) -> Duration {
    self.timestamp
  }
}
