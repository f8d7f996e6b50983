use super::{Actor, ActorContext};
use crate::core::{error::ActorError, messaging::AnyMessageView};

/// Message handler that can be pushed onto an actor's behavior stack.
pub trait MessageHandler: Send + Sync {
  /// Handles `message` if this handler recognises it; returns `None` otherwise.
  fn try_handle(
    &self,
    actor: &mut dyn Actor,
    ctx: &mut ActorContext<'_>,
    message: AnyMessageView<'_>,
  ) -> Option<Result<(), ActorError>>;
}
