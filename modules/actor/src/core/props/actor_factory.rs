use alloc::boxed::Box;

use crate::core::{actor_prim::Actor, error::ActorError};

/// Produces fresh actor instances; called on creation and again on every restart.
pub trait ActorFactory: Send + Sync {
  /// Builds a new instance.
  ///
  /// # Errors
  ///
  /// Returns an error when the instance cannot be built. The failure is treated as an
  /// initialization failure and stops the actor.
  fn create(&self) -> Result<Box<dyn Actor>, ActorError>;
}

impl<F> ActorFactory for F
where
  F: Fn() -> Result<Box<dyn Actor>, ActorError> + Send + Sync,
{
  fn create(&self) -> Result<Box<dyn Actor>, ActorError> {
    self()
  }
}
