use super::Pid;

/// User message a watcher receives when a watched actor terminates.
///
/// It is routed to [`Actor::on_terminated`](super::Actor::on_terminated) instead of the
/// behavior stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminated {
  actor:               Pid,
  existence_confirmed: bool,
}

impl Terminated {
  /// Creates the notification.
  #[must_use]
  pub const fn new(actor: Pid, existence_confirmed: bool) -> Self {
    Self { actor, existence_confirmed }
  }

  /// The terminated actor.
  #[must_use]
  pub const fn actor(&self) -> Pid {
    self.actor
  }

  /// `false` if the actor was already gone when the watch was registered.
  #[must_use]
  pub const fn existence_confirmed(&self) -> bool {
    self.existence_confirmed
  }
}
