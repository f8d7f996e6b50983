use core::{any::Any, fmt};

use tessera_utils_rs::core::sync::ArcShared;

use super::AnyMessageView;
use crate::core::actor_prim::ActorRef;


/// Immutable envelope pairing a dynamically typed payload with its optional sender.
///
/// The payload is shared, so cloning an envelope (for dead letters or replay buffers) never
/// copies the message itself.
#[derive(Clone)]
pub struct AnyMessage {
  payload: ArcShared<dyn Any + Send + Sync>,
  sender:  Option<ActorRef>,
}

impl AnyMessage {
  /// Wraps `value` without a sender.
  #[must_use]
  pub fn new<T>(value: T) -> Self
  where
    T: Any + Send + Sync, {
    let payload = ArcShared::new(value).into_dyn(|value| value as &(dyn Any + Send + Sync));
    Self { payload, sender: None }
  }

  /// Returns a copy of this envelope carrying `sender`.
  #[must_use]
  pub fn with_sender(mut self, sender: ActorRef) -> Self {
    self.sender = Some(sender);
    self
  }

  /// Returns the payload.
  #[must_use]
  pub fn payload(&self) -> &(dyn Any + Send + Sync) {
    &*self.payload
  }

  /// Returns the sender, if any.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Attempts to view the payload as a `T`.
  #[must_use]
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.payload.downcast_ref::<T>()
  }

  /// Returns `true` if the payload is a `T`.
  #[must_use]
  pub fn is<T: Any>(&self) -> bool {
    self.payload.is::<T>()
  }

  /// Borrows the envelope as a view handed to message handlers.
  #[must_use]
  pub fn as_view(&self) -> AnyMessageView<'_> {
    AnyMessageView::new(&*self.payload, self.sender.as_ref())
  }
}

impl fmt::Debug for AnyMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AnyMessage").field("sender", &self.sender.as_ref().map(ActorRef::pid)).finish_non_exhaustive()
  }
}
