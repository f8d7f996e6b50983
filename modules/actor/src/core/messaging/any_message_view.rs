use core::any::{Any, TypeId};

use crate::core::actor_prim::ActorRef;

/// Borrowed view of a message handed to handlers for the duration of one dispatch.
#[derive(Clone, Copy)]
pub struct AnyMessageView<'a> {
  payload: &'a (dyn Any + Send + Sync + 'static),
  sender:  Option<&'a ActorRef>,
}

impl<'a> AnyMessageView<'a> {
  /// Creates a view.
  #[must_use]
  pub const fn new(payload: &'a (dyn Any + Send + Sync + 'static), sender: Option<&'a ActorRef>) -> Self {
    Self { payload, sender }
  }

  /// Attempts to view the payload as a `T`.
  #[must_use]
  pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
    self.payload.downcast_ref::<T>()
  }

  /// Returns `true` if the payload is a `T`.
  #[must_use]
  pub fn is<T: Any>(&self) -> bool {
    self.payload.is::<T>()
  }

  /// Returns the [`TypeId`] of the payload.
  #[must_use]
  pub fn type_id(&self) -> TypeId {
    (*self.payload).type_id()
  }

  /// Returns the sender, if any.
  #[must_use]
  pub const fn sender(&self) -> Option<&'a ActorRef> {
    self.sender
  }

  /// Returns the raw payload.
  #[must_use]
  pub const fn payload(&self) -> &'a (dyn Any + Send + Sync + 'static) {
    self.payload
  }
}
