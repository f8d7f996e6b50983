use alloc::{boxed::Box, vec::Vec};
use core::any::Any;

use super::{Actor, ActorContext, MessageHandler};
use crate::core::{error::ActorError, messaging::AnyMessageView};

type HandlerFn<A> =
  Box<dyn Fn(&mut A, &mut ActorContext<'_>, AnyMessageView<'_>) -> Option<Result<(), ActorError>> + Send + Sync>;

/// Ordered list of typed handlers for actors of type `A`.
///
/// Handlers are tried in registration order; the first one whose message type matches handles
/// the message. Messages nobody matches go to [`Actor::unhandled`].
pub struct Behavior<A> {
  handlers: Vec<HandlerFn<A>>,
}

impl<A: Actor> Behavior<A> {
  /// Creates a behavior without handlers.
  #[must_use]
  pub const fn new() -> Self {
    Self { handlers: Vec::new() }
  }

  /// Adds a handler for messages of type `T`.
  #[must_use]
  pub fn on<T, F>(mut self, handler: F) -> Self
  where
    T: Any,
    F: Fn(&mut A, &mut ActorContext<'_>, &T) -> Result<(), ActorError> + Send + Sync + 'static, {
    self.handlers.push(Box::new(
      move |actor: &mut A, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>| -> Option<Result<(), ActorError>> {
        message.downcast_ref::<T>().map(|value| handler(actor, ctx, value))
      },
    ));
    self
  }

  /// Adds a handler accepting any message.
  #[must_use]
  pub fn on_any<F>(mut self, handler: F) -> Self
  where
    F: Fn(&mut A, &mut ActorContext<'_>, AnyMessageView<'_>) -> Result<(), ActorError> + Send + Sync + 'static, {
    self.handlers.push(Box::new(
      move |actor: &mut A, ctx: &mut ActorContext<'_>, message: AnyMessageView<'_>| -> Option<Result<(), ActorError>> {
        Some(handler(actor, ctx, message))
      },
    ));
    self
  }

  /// Number of registered handlers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  /// Returns `true` if no handler is registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }
}

impl<A: Actor> Default for Behavior<A> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Actor> MessageHandler for Behavior<A> {
  fn try_handle(
    &self,
    actor: &mut dyn Actor,
    ctx: &mut ActorContext<'_>,
    message: AnyMessageView<'_>,
  ) -> Option<Result<(), ActorError>> {
    let actor: &mut dyn Any = actor;
    let actor = actor.downcast_mut::<A>()?;
    self.handlers.iter().find_map(|handler| handler(actor, ctx, message))
  }
}
