use super::FailurePayload;
use crate::core::{actor_prim::Pid, error::ActorError};


/// Control-plane protocol exchanged between a cell, its parent, its children and its watchers.
///
/// System messages are never dropped by a live mailbox and always processed before user
/// messages. A message is moved into exactly one mailbox; the type is deliberately not `Clone`.
#[derive(Debug)]
pub enum SystemMessage {
  /// Instantiates the actor and runs its start hook.
  Create,
  /// Replaces the failed actor instance with a fresh one.
  Recreate(ActorError),
  /// Stops user-message delivery; nests with further suspensions.
  Suspend,
  /// Undoes one suspension. Carries the cause when it answers a failure.
  Resume(Option<ActorError>),
  /// Stops the actor and its children.
  Terminate,
  /// Tells a parent that a child has been created.
  Supervise {
    /// Created child.
    child:    Pid,
    /// Whether the child was created asynchronously.
    is_async: bool,
  },
  /// Registers `watcher` for the death of `watchee`.
  Watch {
    /// Watched actor.
    watchee: Pid,
    /// Watching actor.
    watcher: Pid,
  },
  /// Removes a registration made by [`SystemMessage::Watch`].
  Unwatch {
    /// Watched actor.
    watchee: Pid,
    /// Watching actor.
    watcher: Pid,
  },
  /// Reports a child failure to its parent.
  Failed(FailurePayload),
  /// Announces that `actor` has terminated.
  DeathWatchNotification {
    /// Terminated actor.
    actor:               Pid,
    /// `false` when the actor was already gone when the watch was requested.
    existence_confirmed: bool,
  },
  /// Terminal marker of a closed system queue; carries no action.
  NoMessage,
}

impl SystemMessage {
  /// Returns `true` for messages held back while the cell is suspended after its own failure.
  #[must_use]
  pub const fn stash_when_failed(&self) -> bool {
    matches!(self, SystemMessage::Failed(_))
  }

  /// Returns `true` for messages held back while the cell waits for its children to stop
  /// during a restart.
  #[must_use]
  pub const fn stash_when_waiting_for_children(&self) -> bool {
    matches!(
      self,
      SystemMessage::Recreate(_) | SystemMessage::Suspend | SystemMessage::Resume(_) | SystemMessage::Failed(_)
    )
  }

  /// Short name used in log messages.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      | SystemMessage::Create => "Create",
      | SystemMessage::Recreate(_) => "Recreate",
      | SystemMessage::Suspend => "Suspend",
      | SystemMessage::Resume(_) => "Resume",
      | SystemMessage::Terminate => "Terminate",
      | SystemMessage::Supervise { .. } => "Supervise",
      | SystemMessage::Watch { .. } => "Watch",
      | SystemMessage::Unwatch { .. } => "Unwatch",
      | SystemMessage::Failed(_) => "Failed",
      | SystemMessage::DeathWatchNotification { .. } => "DeathWatchNotification",
      | SystemMessage::NoMessage => "NoMessage",
    }
  }
}
