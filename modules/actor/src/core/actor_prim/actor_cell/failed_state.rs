use crate::core::actor_prim::Pid;

/// Failure bookkeeping of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FailedState {
  Healthy,
  /// Suspended after a failure of the actor itself or of the named child.
  Perpetrator(Pid),
  /// The instance could not be created; a later restart skips its pre-restart hook.
  Fatal,
}

impl FailedState {
  pub(super) const fn is_failed(&self) -> bool {
    matches!(self, Self::Perpetrator(_))
  }

  pub(super) const fn is_fatal(&self) -> bool {
    matches!(self, Self::Fatal)
  }

  pub(super) const fn perpetrator(&self) -> Option<Pid> {
    match self {
      | Self::Perpetrator(pid) => Some(*pid),
      | Self::Healthy | Self::Fatal => None,
    }
  }

  pub(super) fn set_failed(&mut self, perpetrator: Pid) {
    if !self.is_fatal() {
      *self = Self::Perpetrator(perpetrator);
    }
  }

  pub(super) fn clear(&mut self) {
    if self.is_failed() {
      *self = Self::Healthy;
    }
  }
}
