use crate::core::{actor_prim::Pid, error::ActorError};

/// Content of a `Failed` system message sent from a child to its parent.
#[derive(Debug)]
pub struct FailurePayload {
  child:          Pid,
  cause:          ActorError,
  uid:            u64,
  initialization: bool,
}

impl FailurePayload {
  /// Failure raised while processing messages.
  #[must_use]
  pub const fn new(child: Pid, cause: ActorError) -> Self {
    Self { child, cause, uid: child.uid(), initialization: false }
  }

  /// Failure raised by the actor constructor or its start hook.
  #[must_use]
  pub const fn initialization(child: Pid, cause: ActorError) -> Self {
    Self { child, cause, uid: child.uid(), initialization: true }
  }

  /// Failing child.
  #[must_use]
  pub const fn child(&self) -> Pid {
    self.child
  }

  /// Failure cause.
  #[must_use]
  pub const fn cause(&self) -> &ActorError {
    &self.cause
  }

  /// Incarnation of the child that failed.
  #[must_use]
  pub const fn uid(&self) -> u64 {
    self.uid
  }

  /// Returns `true` when no valid actor instance exists to resume or restart into.
  #[must_use]
  pub const fn is_initialization(&self) -> bool {
    self.initialization
  }

  /// Consumes the payload and returns the cause.
  #[must_use]
  pub fn into_cause(self) -> ActorError {
    self.cause
  }
}
