use crate::core::{
  actor_prim::{Actor, ActorContext, Pid},
  error::ActorError,
  messaging::AnyMessageView,
};

/// Behavior of the root and user guardians.
///
/// The root guardian watches the user guardian and stops itself once it is gone, which
/// terminates the system.
pub(crate) struct GuardianActor {
  stop_with_children: bool,
}

impl GuardianActor {
  pub(crate) const fn root() -> Self {
    Self { stop_with_children: true }
  }

  pub(crate) const fn user() -> Self {
    Self { stop_with_children: false }
  }
}

impl Actor for GuardianActor {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError> {
    self.unhandled(ctx, message);
    Ok(())
  }

  fn on_terminated(&mut self, ctx: &mut ActorContext<'_>, _terminated: Pid) -> Result<(), ActorError> {
    if self.stop_with_children {
      ctx.stop_self();
    }
    Ok(())
  }
}
