use core::any::Any;

use super::{ActorContext, Pid};
use crate::core::{
  error::ActorError,
  messaging::{AnyMessage, AnyMessageView},
};

/// Lifecycle hooks and the message handler of an actor.
///
/// A cell owns one instance at a time and never calls it from two threads at once, so
/// implementations keep plain mutable state. Errors and panics raised by any hook are reported to
/// the parent's supervisor.
pub trait Actor: Any + Send {
  /// Called once after the instance has been created, before any message is delivered.
  ///
  /// # Errors
  ///
  /// A failing start hook is an initialization failure: the actor is stopped regardless of the
  /// supervisor strategy.
  fn on_start(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    Ok(())
  }

  /// Handles a message when the behavior stack has no installed [`Behavior`](super::Behavior)
  /// on top.
  ///
  /// # Errors
  ///
  /// Returns an error to hand the failure to the supervisor.
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) -> Result<(), ActorError>;

  /// Called once when the actor stops, and on the failed instance during a restart through the
  /// default [`on_pre_restart`](Self::on_pre_restart).
  ///
  /// # Errors
  ///
  /// Errors are logged; they never block termination.
  fn on_stop(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    Ok(())
  }

  /// Called on the failed instance before it is discarded by a restart. `message` is the message
  /// whose processing failed, if any.
  ///
  /// The default stops every child, then runs [`on_stop`](Self::on_stop).
  ///
  /// # Errors
  ///
  /// Errors are logged; the restart proceeds.
  fn on_pre_restart(
    &mut self,
    ctx: &mut ActorContext<'_>,
    _reason: &ActorError,
    _message: Option<&AnyMessage>,
  ) -> Result<(), ActorError> {
    ctx.stop_children();
    self.on_stop(ctx)
  }

  /// Called on the fresh instance created by a restart. The default runs
  /// [`on_start`](Self::on_start).
  ///
  /// # Errors
  ///
  /// A failing post-restart hook is reported to the supervisor like a failed start.
  fn on_post_restart(&mut self, ctx: &mut ActorContext<'_>, _reason: &ActorError) -> Result<(), ActorError> {
    self.on_start(ctx)
  }

  /// Called when an actor watched through [`ActorContext::watch`] has terminated.
  ///
  /// # Errors
  ///
  /// Returns an error to hand the failure to the supervisor.
  fn on_terminated(&mut self, _ctx: &mut ActorContext<'_>, _terminated: Pid) -> Result<(), ActorError> {
    Ok(())
  }

  /// Receives messages no installed behavior handled. The default publishes an unhandled
  /// message event.
  fn unhandled(&mut self, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>) {
    ctx.publish_unhandled(message);
  }
}
